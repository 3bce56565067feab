use serde_json::{json, Value};

/// Composite instruction asking for a diagnosis and a targeted practice problem.
///
/// Missing fields render as `None` so the model still sees which part was absent.
pub fn analysis_prompt(problem: Option<&str>, student_answer: Option<&str>) -> String {
    let problem = problem.unwrap_or("None");
    let student_answer = student_answer.unwrap_or("None");

    format!(
        "The student attempted to solve the problem: '{problem}'. The student's answer was: '{student_answer}'. \
         First, provide a detailed analysis of the likely conceptual mistake the student made \
         (e.g., failed to distribute, error in sign change, exponent rule violation). \
         Second, generate a new, similar math problem (without the solution) that specifically focuses on testing and fixing that identified weakness. \
         Structure your entire response as a clean JSON object with two keys: 'mistake_analysis' (string) and 'new_problem' (string). \
         Use LaTex for the math in the new problem."
    )
}

pub fn mistake_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "mistake_analysis": { "type": "STRING" },
            "new_problem": { "type": "STRING" }
        },
        "required": ["mistake_analysis", "new_problem"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_problem_and_answer() {
        let prompt = analysis_prompt(Some("2x + 3 = 7"), Some("x = 5"));
        assert!(prompt.contains("'2x + 3 = 7'"));
        assert!(prompt.contains("'x = 5'"));
        assert!(prompt.contains("'mistake_analysis'"));
        assert!(prompt.contains("'new_problem'"));
        assert!(prompt.ends_with("Use LaTex for the math in the new problem."));
    }

    #[test]
    fn missing_fields_render_as_none() {
        let prompt = analysis_prompt(None, None);
        assert!(prompt.contains("the problem: 'None'"));
        assert!(prompt.contains("answer was: 'None'"));
    }

    #[test]
    fn schema_requires_both_string_fields() {
        let schema = mistake_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["mistake_analysis"]["type"], "STRING");
        assert_eq!(schema["properties"]["new_problem"]["type"], "STRING");
        assert_eq!(schema["required"], json!(["mistake_analysis", "new_problem"]));
    }
}
