//! Spoken reply templates for movie intents.

use std::fmt::Display;

pub fn no_movie_slot() -> String {
    "I didn't catch the name of the movie. Try asking again with the movie's title.".to_string()
}

pub fn no_movie_found(query: &str) -> String {
    format!("I couldn't find {query} on your wanted list. Let me search for it.")
}

pub fn add_prompt(title: &str, year: impl Display) -> String {
    format!("The top result is {title}, released in {year}. Would you like me to add it?")
}

pub fn already_wanted(title: &str, year: impl Display) -> String {
    format!("{title}, released in {year}, is already on your wanted list.")
}

pub fn add_not_found(name: &str) -> String {
    format!("Sorry, I couldn't find any movies matching {name}.")
}

pub fn next_prompt(title: &str, year: impl Display) -> String {
    format!("How about {title}, released in {year}? Should I add that one?")
}

pub fn added(title: &str) -> String {
    format!("Okay, {title} has been added to your wanted list.")
}

pub fn no_more_results() -> String {
    "That's all the results I found. Try searching again with a different title or year."
        .to_string()
}

pub fn nothing_to_confirm() -> String {
    "There's nothing waiting for an answer right now. Ask me to find or add a movie.".to_string()
}

pub fn welcome() -> String {
    "Welcome. You can ask me whether a movie is on your wanted list, or ask me to add one."
        .to_string()
}

pub fn help() -> String {
    "Say, find Inception, to check your wanted list, or, add Dune from 2021, to add a movie. \
     What would you like to do?"
        .to_string()
}

pub fn goodbye() -> String {
    "Goodbye.".to_string()
}

pub fn unknown_intent() -> String {
    "Sorry, I don't know how to do that yet.".to_string()
}

pub fn service_error() -> String {
    "Sorry, I had trouble reaching your movie library. Please try again later.".to_string()
}
