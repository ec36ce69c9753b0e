//! Builtin question-answering prompt texts
//!
//! Each prompt is a fixed system preamble plus a user body carrying the
//! `{context}` and `{query}` markers. The texts are consumed downstream as-is,
//! so edits here change model behavior.

/// Collection of builtin prompt texts
pub struct BuiltinPrompts;

impl BuiltinPrompts {
    /// Basic prompt: system instructions
    pub const BASIC_PREAMBLE: &'static str = r#"Just answer queries based on the provided context."#;

    /// Basic prompt: user message with `{context}` and `{query}` markers
    pub const BASIC_BODY: &'static str = r#"Answer the query: {query} based uniquely on the context: {context}, don't make up anything, just say what the context contains. If the information is not in the context, you must say you don't know. You must answer only the specified question and nothing else."#;

    pub const BASIC_DESCRIPTION: &'static str = "Default prompt: answer strictly from the context in one free-form instruction";

    /// Chain-of-thought prompt: system instructions
    pub const CHAIN_OF_THOUGHT_PREAMBLE: &'static str = r#"You are a precise question-answering assistant. Follow these steps:
1. First, carefully read and understand the provided context
2. Identify the key information relevant to the question
3. Structure your reasoning step by step
4. Provide a concise answer based ONLY on the context
5. If information is missing, clearly state what you don't know

Remember: Never make assumptions or add information not present in the context."#;

    /// Chain-of-thought prompt: user message with `{context}` and `{query}` markers
    pub const CHAIN_OF_THOUGHT_BODY: &'static str = r#"Context: {context}

Question: {query}

Let's solve this step by step:
1. What specific information from the context is relevant?
2. How does this information answer the question?
3. What is the precise answer based solely on the context?

Answer:"#;

    pub const CHAIN_OF_THOUGHT_DESCRIPTION: &'static str = "Step-by-step reasoning over the context before answering";

    /// Few-shot prompt: system instructions
    pub const FEW_SHOT_PREAMBLE: &'static str = r#"You are a precise question-answering assistant. Answer questions based ONLY on the provided context."#;

    /// Few-shot prompt: user message with `{context}` and `{query}` markers
    pub const FEW_SHOT_BODY: &'static str = r#"Here are some examples of good responses:

Context: The Eiffel Tower was completed in 1889. It stands 324 meters tall.
Question: When was the Eiffel Tower built?
Answer: The Eiffel Tower was completed in 1889.

Context: The Eiffel Tower was completed in 1889. It stands 324 meters tall.
Question: What is its color?
Answer: I cannot answer this question as the context does not contain any information about the Eiffel Tower's color.

Now please answer the following:
Context: {context}
Question: {query}"#;

    pub const FEW_SHOT_DESCRIPTION: &'static str = "Two worked examples, one answerable and one not, before the question";

    /// Structured output prompt: system instructions
    pub const STRUCTURED_PREAMBLE: &'static str = r#"You are a precise question-answering assistant. Answer questions based ONLY on the provided context."#;

    /// Structured output prompt: user message with `{context}` and `{query}` markers
    pub const STRUCTURED_BODY: &'static str = r#"Context: {context}

Question: {query}

Please provide your answer in this format:
RELEVANT CONTEXT: [Quote the specific parts of the context that are relevant]
REASONING: [Explain your step-by-step thought process]
CONFIDENCE: [High/Medium/Low - based on how directly the context answers the question]
FINAL ANSWER: [Concise answer based only on the context]"#;

    pub const STRUCTURED_DESCRIPTION: &'static str = "Answer split into relevant context, reasoning, confidence and final answer";

    /// Constrained prompt: system instructions
    pub const CONSTRAINED_PREAMBLE: &'static str = r#"You are a precise question-answering assistant. Answer questions based ONLY on the provided context."#;

    /// Constrained prompt: user message with `{context}` and `{query}` markers
    pub const CONSTRAINED_BODY: &'static str = r#"Important constraints:
1. Maximum answer length: 50 words
2. Use only information explicitly stated in the context
3. If multiple interpretations are possible, list them
4. For numerical answers, include units if provided
5. Express uncertainty when context is ambiguous

Context: {context}
Question: {query}"#;

    pub const CONSTRAINED_DESCRIPTION: &'static str = "Short answers with explicit constraints on length, units and ambiguity";

    /// Role-based prompt: system instructions
    pub const ROLE_BASED_PREAMBLE: &'static str = r#"You are an expert research assistant with these key traits:
1. Extreme precision in citing information
2. Strong analytical skills for understanding context
3. Honest about knowledge limitations
4. Clear and concise communication
5. Methodical in analyzing questions

Answer questions based ONLY on the provided context."#;

    /// Role-based prompt: user message with `{context}` and `{query}` markers
    pub const ROLE_BASED_BODY: &'static str = r#"Context: {context}
Question: {query}"#;

    pub const ROLE_BASED_DESCRIPTION: &'static str = "Expert research assistant persona";

    /// Self-verification prompt: system instructions
    pub const SELF_VERIFY_PREAMBLE: &'static str = r#"You are a precise question-answering assistant. Answer questions based ONLY on the provided context."#;

    /// Self-verification prompt: user message with `{context}` and `{query}` markers
    pub const SELF_VERIFY_BODY: &'static str = r#"Context: {context}
Question: {query}

After formulating your answer, please:
1. Verify that every statement is supported by the context
2. Check if any assumptions were made
3. Confirm the answer directly addresses the question
4. Ensure no external knowledge was used
5. Validate confidence level assessment

Your response:"#;

    pub const SELF_VERIFY_DESCRIPTION: &'static str = "Answer followed by a self-verification checklist";
}
