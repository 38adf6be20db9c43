//! Prompt template for interview question generation

use crate::gateway::GenerationRequest;

/// Build the generation prompt for a request
pub fn interview_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Prepare {amount} questions for a job interview.
The job role is: {role}
The job experience level is: {level}
The tech stack used in the job is: {techstack}
The focus between behavioural and technical questions should lean towards: {kind}

Important instructions:
- Return ONLY a valid JSON array of strings
- Each question should be a complete, well-formed interview question
- Do not use special characters like /, *, #, or any markdown formatting
- Questions will be read by a voice assistant, so they should sound natural when spoken
- Mix the question types based on the '{kind}' preference
- Make questions appropriate for the '{level}' experience level

Example format:
["What is your experience with React and how have you used it in previous projects", "Tell me about a challenging problem you solved in your last role", "How do you approach debugging complex issues in production"]

Generate exactly {amount} questions now."#,
        amount = request.amount,
        role = request.role,
        level = request.level,
        techstack = request.techstack,
        kind = request.interview_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_parameters() {
        let request = GenerationRequest {
            role: "backend engineer".into(),
            level: "senior".into(),
            techstack: "Go, Postgres".into(),
            interview_type: "technical".into(),
            amount: "5".into(),
            userid: "u1".into(),
        };
        let prompt = interview_prompt(&request);
        assert!(prompt.starts_with("Prepare 5 questions"));
        assert!(prompt.contains("The job role is: backend engineer"));
        assert!(prompt.contains("The tech stack used in the job is: Go, Postgres"));
        assert!(prompt.contains("'senior' experience level"));
        assert!(prompt.ends_with("Generate exactly 5 questions now."));
    }
}
