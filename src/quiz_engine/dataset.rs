//! The embedded question dataset: four categories of interview-prep
//! questions. Static content only — all behavior lives in `bank`,
//! `session`, and `stats`.

use crate::quiz_engine::bank::QuestionBank;
use crate::quiz_engine::models::{Category, Question};

/// Build one question. `correct` indexes into `options`.
fn q(text: &str, options: &[&str], correct: usize, explanation: &str) -> Question {
    Question {
        text: text.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_index: correct,
        explanation: explanation.to_string(),
    }
}

fn category(key: &str, display_name: &str, questions: Vec<Question>) -> Category {
    Category {
        key: key.to_string(),
        display_name: display_name.to_string(),
        questions,
    }
}

/// The built-in bank used by the application driver.
///
/// The dataset is known-valid, so the validation in [`QuestionBank::new`]
/// cannot fail here; the `expect` documents that assumption.
pub fn builtin_bank() -> QuestionBank {
    QuestionBank::new(builtin_categories()).expect("builtin dataset is valid")
}

fn builtin_categories() -> Vec<Category> {
    vec![
        category(
            "data_structures",
            "Data Structures",
            vec![
                q(
                    "What is the time complexity of accessing an element in an array by index?",
                    &["O(1)", "O(log n)", "O(n)", "O(n²)"],
                    0,
                    "Array access by index is constant time O(1) because arrays store elements contiguously in memory.",
                ),
                q(
                    "Which data structure follows LIFO (Last In, First Out) principle?",
                    &["Queue", "Stack", "Array", "Linked List"],
                    1,
                    "A stack follows LIFO - the last element added is the first one to be removed.",
                ),
                q(
                    "What is the space complexity of a binary tree with n nodes?",
                    &["O(1)", "O(log n)", "O(n)", "O(n²)"],
                    2,
                    "A binary tree with n nodes requires O(n) space to store all nodes.",
                ),
                q(
                    "In a hash table, what happens when two keys hash to the same index?",
                    &["Error occurs", "Collision occurs", "Data is lost", "Array resizes"],
                    1,
                    "When two keys hash to the same index, it's called a collision and needs to be resolved.",
                ),
                q(
                    "What is the average time complexity for searching in a balanced BST?",
                    &["O(1)", "O(log n)", "O(n)", "O(n log n)"],
                    1,
                    "In a balanced Binary Search Tree, search operations take O(log n) time on average.",
                ),
            ],
        ),
        category(
            "algorithms",
            "Algorithms",
            vec![
                q(
                    "What is the time complexity of the quicksort algorithm in the average case?",
                    &["O(n)", "O(n log n)", "O(n²)", "O(log n)"],
                    1,
                    "Quicksort has O(n log n) average time complexity, though worst case is O(n²).",
                ),
                q(
                    "Which algorithm technique does binary search use?",
                    &["Greedy", "Dynamic Programming", "Divide and Conquer", "Backtracking"],
                    2,
                    "Binary search uses divide and conquer by repeatedly splitting the search space in half.",
                ),
                q(
                    "What is the space complexity of merge sort?",
                    &["O(1)", "O(log n)", "O(n)", "O(n²)"],
                    2,
                    "Merge sort requires O(n) additional space for the temporary arrays during merging.",
                ),
                q(
                    "Which sorting algorithm is stable and has O(n log n) worst-case time complexity?",
                    &["Quick Sort", "Heap Sort", "Merge Sort", "Selection Sort"],
                    2,
                    "Merge sort is stable (maintains relative order) and has O(n log n) worst-case complexity.",
                ),
                q(
                    "What is dynamic programming primarily used for?",
                    &["Sorting arrays", "Graph traversal", "Optimization problems", "Memory management"],
                    2,
                    "Dynamic programming is used to solve optimization problems by breaking them into overlapping subproblems.",
                ),
            ],
        ),
        category(
            "python",
            "Python Programming",
            vec![
                q(
                    "What is the result of: 3 ** 2?",
                    &["6", "9", "5", "8"],
                    1,
                    "The ** operator is exponentiation in Python, so 3 ** 2 = 3² = 9.",
                ),
                q(
                    "Which Python data type is mutable?",
                    &["tuple", "string", "list", "int"],
                    2,
                    "Lists are mutable in Python, meaning you can change their contents after creation.",
                ),
                q(
                    "What does 'self' represent in Python class methods?",
                    &["The class itself", "A global variable", "The instance of the class", "Nothing special"],
                    2,
                    "'self' refers to the instance of the class that the method is being called on.",
                ),
                q(
                    "What is the correct way to create a dictionary in Python?",
                    &["dict = []", "dict = {}", "dict = ()", "dict = <>"],
                    1,
                    "Dictionaries in Python are created using curly braces {} or the dict() constructor.",
                ),
                q(
                    "What is the difference between '==' and 'is' in Python?",
                    &[
                        "No difference",
                        "'==' compares values, 'is' compares identity",
                        "'is' compares values, '==' compares identity",
                        "Both compare identity",
                    ],
                    1,
                    "'==' compares values for equality, while 'is' compares object identity (whether they're the same object).",
                ),
            ],
        ),
        category(
            "big_o",
            "Big O Notation",
            vec![
                q(
                    "Which complexity grows the fastest?",
                    &["O(n)", "O(log n)", "O(n²)", "O(1)"],
                    2,
                    "O(n²) quadratic complexity grows much faster than linear O(n) or logarithmic O(log n).",
                ),
                q(
                    "What is the time complexity of a nested loop where both loops run n times?",
                    &["O(n)", "O(log n)", "O(n²)", "O(2n)"],
                    2,
                    "Two nested loops, each running n times, results in n × n = O(n²) time complexity.",
                ),
                q(
                    "Which operation on a sorted array has O(log n) complexity?",
                    &["Linear search", "Binary search", "Insertion", "Deletion"],
                    1,
                    "Binary search on a sorted array has O(log n) complexity by eliminating half the search space each step.",
                ),
                q(
                    "What is the space complexity of an algorithm that uses a fixed amount of extra space?",
                    &["O(n)", "O(log n)", "O(1)", "O(n²)"],
                    2,
                    "If an algorithm uses a constant amount of extra space regardless of input size, it's O(1) space.",
                ),
                q(
                    "In Big O notation, what do we focus on?",
                    &["Best case", "Average case", "Worst case", "All cases equally"],
                    2,
                    "Big O notation typically describes the worst-case time or space complexity of an algorithm.",
                ),
            ],
        ),
    ]
}
