use std::fmt;

const NO_BOX_INSTRUCTION: &str = " Do not use the \\boxed{} command or any boxing for the final answer. Just write the answer plainly.";

/// Tutoring style selected by the `mode` field of a solve request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    ExplainLikeIm10,
    WalkMeSlowly,
    StrictExaminer,
    #[default]
    TeacherMode,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::ExplainLikeIm10,
        Persona::WalkMeSlowly,
        Persona::StrictExaminer,
        Persona::TeacherMode,
    ];

    /// Unknown or missing modes fall back to `TeacherMode`.
    pub fn from_mode(mode: Option<&str>) -> Self {
        match mode {
            Some("explain_like_im_10") => Self::ExplainLikeIm10,
            Some("walk_me_slowly") => Self::WalkMeSlowly,
            Some("strict_examiner") => Self::StrictExaminer,
            _ => Self::TeacherMode,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExplainLikeIm10 => "explain_like_im_10",
            Self::WalkMeSlowly => "walk_me_slowly",
            Self::StrictExaminer => "strict_examiner",
            Self::TeacherMode => "teacher_mode",
        }
    }

    fn base_instruction(self) -> &'static str {
        match self {
            Self::ExplainLikeIm10 => {
                "You are a fun, enthusiastic tutor. Explain the math problem using simple words and relatable analogies, as if speaking to a 10-year-old. Use emojis and keep the tone light. Ensure all math is clear."
            }
            Self::WalkMeSlowly => {
                "You are a very methodical and patient teacher. Break the solution into the smallest, most digestible steps (no more than one operation per line), explaining the *why* after every line of computation. Use Markdown for clarity."
            }
            Self::StrictExaminer => {
                "You are a formal, strict university examiner. Provide the solution using only mathematically rigorous notation, giving a clean, concise derivation and final answer. Do not use conversational language or excessive explanation."
            }
            Self::TeacherMode => {
                "You are a professional math tutor. Provide a clear, detailed, step-by-step solution using standard academic language. Use LaTex for math formulas where appropriate."
            }
        }
    }

    /// System instruction sent with every solve call for this persona.
    pub fn instruction(self) -> String {
        format!("{}{}", self.base_instruction(), NO_BOX_INSTRUCTION)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_modes_map_to_their_persona() {
        for persona in Persona::ALL {
            assert_eq!(Persona::from_mode(Some(persona.as_str())), persona);
        }
    }

    #[test]
    fn unknown_or_missing_mode_falls_back_to_teacher() {
        assert_eq!(Persona::from_mode(None), Persona::TeacherMode);
        assert_eq!(Persona::from_mode(Some("")), Persona::TeacherMode);
        assert_eq!(Persona::from_mode(Some("pirate_mode")), Persona::TeacherMode);
        assert_eq!(Persona::from_mode(Some("STRICT_EXAMINER")), Persona::TeacherMode);
        assert_eq!(Persona::from_mode(Some(" strict_examiner ")), Persona::TeacherMode);
    }

    #[test]
    fn every_instruction_forbids_boxed_answers() {
        for persona in Persona::ALL {
            assert!(persona.instruction().ends_with(NO_BOX_INSTRUCTION));
            assert!(persona.instruction().contains("\\boxed{}"));
        }
    }

    #[test]
    fn teacher_instruction_keeps_its_wording() {
        assert!(Persona::TeacherMode
            .instruction()
            .starts_with("You are a professional math tutor."));
        assert!(Persona::TeacherMode
            .instruction()
            .contains("Use LaTex for math formulas where appropriate."));
    }

    #[test]
    fn instructions_are_distinct() {
        let texts: Vec<String> = Persona::ALL.iter().map(|p| p.instruction()).collect();
        for (i, a) in texts.iter().enumerate() {
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
