pub mod flashcards;
pub mod quizzes;
pub mod words;
