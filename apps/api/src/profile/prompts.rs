//! LLM prompt constants for profile expansion.

/// System prompt for profile expansion — enforces JSON-only output.
pub const PROFILE_EXPAND_SYSTEM: &str =
    "You are an expert career advisor for software engineers. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Profile expansion prompt template. Replace every `{placeholder}` before
/// sending.
pub const PROFILE_EXPAND_PROMPT_TEMPLATE: &str = r#"Expand this candidate profile for a job search.

## Candidate:
- Current Role: {role}
- Current Company: {company}
- Years of Experience: {years_of_experience}
- Stated Skills: {skills}
- Expected Salary (USD): {expected_salary}
- Preferred Location: {location}

Infer:
1. inferred_skills: 5-10 skills this person most likely has, given role and company.
2. seniority_level: one of intern, junior, mid, senior, staff, principal, manager.
3. target_titles: 3-5 job titles this person should search for next.
4. company_tier: one of FAANG, Big Tech, Unicorn, Startup, Enterprise, Unknown.
5. expected_salary_range: a realistic range as a short string.

Return a JSON object with this EXACT schema:
{
  "inferred_skills": ["...", "..."],
  "seniority_level": "senior",
  "target_titles": ["...", "..."],
  "company_tier": "Big Tech",
  "expected_salary_range": "$150k-$200k"
}"#;
