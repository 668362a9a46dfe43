pub mod list_questions_route;
