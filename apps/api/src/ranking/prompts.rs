//! LLM prompt constants for job scoring.

/// System prompt for batch scoring — enforces JSON-only output.
pub const JOB_RANK_SYSTEM: &str =
    "You are an expert tech recruiter matching candidates to jobs. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Batch scoring prompt template. Replace every `{placeholder}` before
/// sending.
pub const JOB_RANK_PROMPT_TEMPLATE: &str = r#"Rank the following jobs for this candidate.

## Candidate Profile:
- Current Role: {role}
- Company: {company} ({company_tier})
- Years of Experience: {years_of_experience}
- Seniority Level: {seniority_level}
- Skills: {skills}
- Target Titles: {target_titles}
- Expected Salary: {expected_salary_range}

## Jobs to Rank:
{jobs_text}

For EACH job listed above, provide:
1. match_score (0-100): How well does this job match the candidate?
   - 90-100: Perfect match
   - 70-89: Strong match
   - 50-69: Moderate match
   - Below 50: Weak match
2. insight (1-2 sentences): Why this is/isn't a good match, in a friendly, helpful tone.
3. match_reasons (2-4 short strings): Key reasons for the score.

Consider:
- Title alignment with experience level
- Company prestige relative to current company
- Skill relevance (infer from job title)
- Career progression (lateral move, step up, step down)

Return a JSON object with this EXACT schema:
{
  "rankings": [
    {"match_score": 85, "insight": "...", "match_reasons": ["...", "..."]}
  ]
}

The rankings array MUST contain exactly one entry per job, in the same order
as the jobs listed above."#;
