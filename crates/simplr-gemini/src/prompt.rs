//! Prompt builders for the explanation panel.

/// Ask for a step-by-step algorithm of a program, in the numbered form lab
/// records expect.
pub fn explain_algorithm(code: &str) -> String {
    format!(
        "
Please provide a detailed explanation of the following code. Break down the explanation into clear, step-by-step instructions, focusing on the flow of the program and the behavior of the code in different scenarios. Be sure to include the following aspects:
- Overview of the code
- Step-by-step execution algorithm starting with \"Step 01: Start of the program\" and ending with \"Step XX: End of the program\"
- Do not provide an overly complex input description; focus on describing the algorithm in detail.

Here is the code:
{code}
"
    )
}

/// Ask a follow-up question grounded in an earlier explanation.
pub fn follow_up(explanation: &str, question: &str) -> String {
    format!(
        "
Based on the following algorithm explanation, please answer this follow-up question:

Algorithm Explanation:
{explanation}

Follow-up Question:
{question}
"
    )
}
