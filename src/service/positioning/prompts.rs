//! Prompt templates for positioning copy generation

use crate::model::PositioningRequest;

/// System prompt for the strategic insights call
pub const INSIGHTS_SYSTEM_PROMPT: &str = "You're a brand strategist trained in positioning frameworks (April Dunford) and copywriting (David Ogilvy, Eugene Schwartz). Provide strategic insights in a clear, thoughtful voice - think senior strategist giving clear feedback in a pitch workshop. No AI voice. Keep it under 100 words.";

/// System prompt for the brand-name sanitize pass
pub const SANITIZE_SYSTEM_PROMPT: &str = "You sanitize marketing copy by removing brand names.";

/// Build the positioning statement prompt
pub fn build_positioning_prompt(request: &PositioningRequest) -> String {
    format!(
        r#"Context: We're building {product}, targeted at {audience}. The product helps them {benefit}.

Task: Write ONE powerful, emotional Positioning Statement for {product}.

Requirements:
- One complete sentence, 25–35 words
- Explain the unique benefit to {audience}
- Contrast with competitors (reference: {competitors})
- End on a vision for the future
- Make it emotionally resonant and specific
- Speak to the customer's pain and aspiration
- Avoid buzzwords and corporate jargon

Output Format:
Return ONLY the positioning statement. No title, no formatting, no explanation. Just the single sentence.

Inputs:
- Target Audience: {audience}
- Top 3 Pain Points: {pains}
- Product Benefit: {benefit}
- Competitors: {competitors}
- Differentiators: {differentiators}"#,
        product = request.product_name,
        audience = request.target_audience,
        pains = request.pain_points,
        benefit = request.product_benefit,
        competitors = request.competitors,
        differentiators = request.differentiators,
    )
}

/// Build the unique value proposition prompt
pub fn build_uvp_prompt(request: &PositioningRequest) -> String {
    format!(
        r#"Context: The product is {product} for {audience}, and solves {pains} in a way that {differentiators}.

Task: Write 3 unique value propositions in the style of David Ogilvy and April Dunford.

Requirements:
- Each must be a single, complete sentence under 25 words
- Emotionally compelling copy that speaks to customer pain and aspiration
- Strategically differentiated positioning that highlights what makes this unique
- Clear benefit statement that resonates immediately
- Avoid abstract claims - be visceral and specific

Output Format:
Return ONLY 3 plain text sentences separated by line breaks. No numbers. No bullet points. No labels. No formatting. Just 3 complete sentences.

Inputs:
- Product Name: {product}
- Target Audience: {audience}
- Top 3 Pain Points: {pains}
- Product Benefit: {benefit}
- Differentiators: {differentiators}"#,
        product = request.product_name,
        audience = request.target_audience,
        pains = request.pain_points,
        benefit = request.product_benefit,
        differentiators = request.differentiators,
    )
}

/// Build the tagline prompt (asks for five semicolon-separated options)
pub fn build_tagline_prompt(request: &PositioningRequest) -> String {
    format!(
        r#"Context: The brand stands for {differentiators}. Our audience feels {pains}, and our product helps them {benefit}.

Task: Write a **Tagline** in the tone of classic advertising legends. It should be short (3–6 words), emotionally sticky, and worthy of living on a billboard.

Guidelines:
- Capture the soul of the product in the fewest words possible.
- Make it sound timeless — like it's always been true.
- Avoid trendy or techy language. Go for feeling and clarity.
- Echo the tone of Nike's "Just Do It" or Apple's "Think Different."

Constraints:
Maximum 6 words. Output 5 options, separated with ;

Inputs:
- Target Audience: {audience}
- Top pain: {pains}
- Core value: {benefit}
- Differentiator: {differentiators}"#,
        audience = request.target_audience,
        pains = request.pain_points,
        benefit = request.product_benefit,
        differentiators = request.differentiators,
    )
}

/// Build the strategic insights prompt
pub fn build_insights_prompt(request: &PositioningRequest) -> String {
    format!(
        r#"Based on the following company input, provide a brief insight summary explaining:

1. What this company appears to be offering.
2. What emotional or strategic angle seems strongest (and why).
3. How the Positioning Statement, UVP, and Tagline might be refined based on this.
4. One key message or phrase they could elevate.
5. Optional: one thing they may be missing or underselling.

Company Information:
- Product Name: {product}
- Target Audience: {audience}
- Top 3 Pain Points: {pains}
- Product Benefit: {benefit}
- Key Competitors: {competitors}
- Differentiators: {differentiators}

Provide strategic insights in under 100 words."#,
        product = request.product_name,
        audience = request.target_audience,
        pains = request.pain_points,
        benefit = request.product_benefit,
        competitors = request.competitors,
        differentiators = request.differentiators,
    )
}

/// Build the prompt that rewrites a positioning draft without brand names
pub fn build_sanitize_prompt(draft: &str, competitors: &str) -> String {
    format!(
        r#"If the text contains any brand or product names, rewrite it to remove or generalize them.

Use neutral contrast ("compared with typical [category] tools" or "versus manual spreadsheets"). Keep ≤55 words, plain language, same meaning, no buzzwords/superlatives.

Return plain text only.

Inputs:
- Draft: {draft}
- Possible brand list: {competitors}
- Category hint: {competitors}"#,
    )
}
