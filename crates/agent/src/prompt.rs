//! Prompt assembly: one model-facing transcript per query.
//!
//! Sections always appear in this order:
//!
//! 1. **System instructions** (persona, allergy/interaction mandate, disclaimer)
//! 2. **Context** (profile + recent consultations)
//! 3. **Chat history** (every prior turn, oldest first)
//! 4. **Current query** followed by an open `Assistant:` turn
//!
//! Static instructions and grounding context precede the dynamic history so
//! that provider-side truncation of long inputs never drops the grounding.

use medcompanion_core::message::ChatMessage;

pub const DISCLAIMER: &str = "DISCLAIMER: You are an AI, not a doctor. Always advise the user to consult a healthcare professional for medical decisions. Your answers are not a substitute for professional medical advice.";

/// Persona and safety instructions placed at the top of every prompt.
pub fn system_instructions() -> String {
    [
        "You are an AI Medical Companion and Assistant.",
        "Your goal is to help the user manage their health, prepare for doctor visits, and understand their medical data.",
        "",
        "CRITICAL INSTRUCTION: You MUST take the patient's specific profile (Allergies, Medications, History) into account.",
        "If the user mentions or asks about any medication, CHECK it against their known allergies and current medications for potential allergic reactions or interactions.",
        "",
        DISCLAIMER,
    ]
    .join("\n")
}

/// Build the full prompt for `query`.
///
/// `history` holds the turns before this one; the query itself is appended
/// as the final user turn.
pub fn assemble_prompt(context: &str, history: &[ChatMessage], query: &str) -> String {
    let mut prompt = system_instructions();

    prompt.push_str("\n\nCONTEXT:\n");
    prompt.push_str(context);

    prompt.push_str("\n\nCHAT HISTORY:\n");
    for message in history {
        prompt.push_str(&format!("{}: {}\n", message.role.label(), message.content));
    }

    prompt.push_str(&format!("\nUser: {query}\nAssistant:"));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_in_fixed_order() {
        let history = vec![
            ChatMessage::user("What is my allergy?"),
            ChatMessage::assistant("You are allergic to penicillin."),
        ];
        let prompt = assemble_prompt("PATIENT PROFILE:\nName: Ann\n", &history, "Can I take amoxicillin?");

        let persona = prompt.find("AI Medical Companion").unwrap();
        let disclaimer = prompt.find(DISCLAIMER).unwrap();
        let context = prompt.find("CONTEXT:\nPATIENT PROFILE:").unwrap();
        let hist = prompt.find("CHAT HISTORY:").unwrap();
        let first_turn = prompt.find("User: What is my allergy?").unwrap();
        let reply = prompt.find("Assistant: You are allergic to penicillin.").unwrap();
        let query = prompt.find("User: Can I take amoxicillin?").unwrap();

        assert!(persona < disclaimer);
        assert!(disclaimer < context);
        assert!(context < hist);
        assert!(hist < first_turn);
        assert!(first_turn < reply);
        assert!(reply < query);
    }

    #[test]
    fn ends_with_open_assistant_turn() {
        let prompt = assemble_prompt("ctx", &[], "Hello");
        assert!(prompt.ends_with("User: Hello\nAssistant:"));
    }

    #[test]
    fn mandates_allergy_and_medication_check() {
        let instructions = system_instructions();
        assert!(instructions.contains("known allergies and current medications"));
        assert!(instructions.contains("not a substitute for professional medical advice"));
    }

    #[test]
    fn empty_history_still_has_section() {
        let prompt = assemble_prompt("ctx", &[], "Hello");
        assert!(prompt.contains("CHAT HISTORY:\n\nUser: Hello"));
    }
}
