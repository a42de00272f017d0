//! Static quiz content for every game mode, with the baked-in default sets.

use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::state::game::{GameMode, QuizItem};

/// Reasons a content set is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A mode needs at least one item to play a round.
    #[error("content set for {0:?} is empty")]
    Empty(GameMode),
    /// An item does not match the kind of item the mode displays.
    #[error("item {index} of {mode:?} is not a {expected} item")]
    WrongKind {
        /// Mode the set was meant for.
        mode: GameMode,
        /// Position of the offending item.
        index: usize,
        /// Kind the mode expects.
        expected: &'static str,
    },
    /// A riddle points at an option that does not exist.
    #[error("riddle {index} has correct option {correct} but only {len} options")]
    CorrectOptionOutOfRange {
        /// Position of the offending riddle.
        index: usize,
        /// Declared correct option.
        correct: usize,
        /// Number of options.
        len: usize,
    },
}

/// Ordered, read-only item sequences keyed by mode.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    sets: IndexMap<GameMode, Arc<[QuizItem]>>,
}

impl ContentLibrary {
    /// Items of `mode`, in play order.
    pub fn items(&self, mode: GameMode) -> Arc<[QuizItem]> {
        self.sets
            .get(&mode)
            .cloned()
            .unwrap_or_else(|| default_set(mode).into())
    }

    /// Replace the set of `mode` after validating it.
    pub fn replace(&mut self, mode: GameMode, items: Vec<QuizItem>) -> Result<(), ContentError> {
        validate_set(mode, &items)?;
        self.sets.insert(mode, items.into());
        Ok(())
    }
}

impl Default for ContentLibrary {
    fn default() -> Self {
        let sets = GameMode::ALL
            .into_iter()
            .map(|mode| (mode, Arc::<[QuizItem]>::from(default_set(mode))))
            .collect();
        Self { sets }
    }
}

/// Check that `items` can be played as `mode`.
pub fn validate_set(mode: GameMode, items: &[QuizItem]) -> Result<(), ContentError> {
    if items.is_empty() {
        return Err(ContentError::Empty(mode));
    }

    for (index, item) in items.iter().enumerate() {
        match (mode, item) {
            (GameMode::Hollywood | GameMode::Indian, QuizItem::Frame { .. })
            | (GameMode::Dialogues, QuizItem::Dialogue { .. }) => {}
            (
                GameMode::Riddles,
                QuizItem::Riddle {
                    options,
                    correct_option,
                    ..
                },
            ) => {
                if *correct_option >= options.len() {
                    return Err(ContentError::CorrectOptionOutOfRange {
                        index,
                        correct: *correct_option,
                        len: options.len(),
                    });
                }
            }
            (mode, _) => {
                return Err(ContentError::WrongKind {
                    mode,
                    index,
                    expected: expected_kind(mode),
                });
            }
        }
    }

    Ok(())
}

fn expected_kind(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Hollywood | GameMode::Indian => "frame",
        GameMode::Riddles => "riddle",
        GameMode::Dialogues => "dialogue",
    }
}

fn default_set(mode: GameMode) -> Vec<QuizItem> {
    match mode {
        GameMode::Hollywood => vec![
            frame(
                "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=800",
                "Hollywood Movie Title 1",
            ),
            frame(
                "https://images.pexels.com/photos/7234213/pexels-photo-7234213.jpeg?auto=compress&cs=tinysrgb&w=800",
                "Hollywood Movie Title 2",
            ),
            frame(
                "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=800",
                "Hollywood Movie Title 3",
            ),
        ],
        GameMode::Indian => vec![
            frame(
                "https://images.pexels.com/photos/1115804/pexels-photo-1115804.jpeg?auto=compress&cs=tinysrgb&w=800",
                "Indian Movie Title 1",
            ),
            frame(
                "https://images.pexels.com/photos/1267697/pexels-photo-1267697.jpeg?auto=compress&cs=tinysrgb&w=800",
                "Indian Movie Title 2",
            ),
            frame(
                "https://images.pexels.com/photos/1115804/pexels-photo-1115804.jpeg?auto=compress&cs=tinysrgb&w=800",
                "Indian Movie Title 3",
            ),
        ],
        GameMode::Riddles => vec![
            riddle(
                "What has keys but no locks, space but no room, and you can enter but not go inside?",
                ["A Piano", "A Keyboard", "A House", "A Car"],
                1,
                "A keyboard has keys, a space bar, and an enter key!",
            ),
            riddle(
                "I speak without a mouth and hear without ears. I have no body, but come alive with wind. What am I?",
                ["A Ghost", "An Echo", "A Radio", "A Telephone"],
                1,
                "An echo repeats sounds and is carried by air/wind!",
            ),
            riddle(
                "The more you take, the more you leave behind. What am I?",
                ["Memories", "Footsteps", "Photographs", "Time"],
                1,
                "The more steps you take, the more footprints you leave behind!",
            ),
        ],
        GameMode::Dialogues => vec![
            dialogue(
                "I'm going to make him an offer he can't refuse.",
                "Don Vito Corleone",
                "The Godfather",
            ),
            dialogue(
                "May the Force be with you.",
                "Multiple characters",
                "Star Wars",
            ),
            dialogue("Here's looking at you, kid.", "Rick Blaine", "Casablanca"),
        ],
    }
}

fn frame(image_url: &str, answer: &str) -> QuizItem {
    QuizItem::Frame {
        image_url: image_url.into(),
        answer: answer.into(),
    }
}

fn dialogue(line: &str, context: &str, answer: &str) -> QuizItem {
    QuizItem::Dialogue {
        line: line.into(),
        context: context.into(),
        answer: answer.into(),
    }
}

fn riddle(question: &str, options: [&str; 4], correct_option: usize, explanation: &str) -> QuizItem {
    QuizItem::Riddle {
        question: question.into(),
        options: options.into_iter().map(Into::into).collect(),
        correct_option,
        explanation: explanation.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sets_are_valid_for_their_mode() {
        let library = ContentLibrary::default();
        for mode in GameMode::ALL {
            let items = library.items(mode);
            assert!(validate_set(mode, &items).is_ok(), "{mode:?}");
        }
    }

    #[test]
    fn default_riddles_are_distinct() {
        let library = ContentLibrary::default();
        let riddles = library.items(GameMode::Riddles);
        for (index, item) in riddles.iter().enumerate() {
            assert!(
                riddles[index + 1..].iter().all(|other| other != item),
                "riddle {index} repeats"
            );
        }
    }

    #[test]
    fn empty_set_is_refused() {
        let mut library = ContentLibrary::default();
        assert_eq!(
            library.replace(GameMode::Dialogues, Vec::new()),
            Err(ContentError::Empty(GameMode::Dialogues))
        );
        assert_eq!(library.items(GameMode::Dialogues).len(), 3);
    }

    #[test]
    fn riddle_with_out_of_range_answer_is_refused() {
        let items = vec![QuizItem::Riddle {
            question: "?".into(),
            options: vec!["one".into()],
            correct_option: 3,
            explanation: String::new(),
        }];
        assert_eq!(
            validate_set(GameMode::Riddles, &items),
            Err(ContentError::CorrectOptionOutOfRange {
                index: 0,
                correct: 3,
                len: 1
            })
        );
    }

    #[test]
    fn mismatched_item_kind_is_refused() {
        let items = vec![frame("https://example.com/x.jpg", "X")];
        assert!(matches!(
            validate_set(GameMode::Dialogues, &items),
            Err(ContentError::WrongKind { index: 0, .. })
        ));
    }

    #[test]
    fn replaced_set_is_served() {
        let mut library = ContentLibrary::default();
        let items = vec![dialogue("Hasta la vista, baby.", "T-800", "Terminator 2")];
        library
            .replace(GameMode::Dialogues, items.clone())
            .unwrap();
        assert_eq!(&*library.items(GameMode::Dialogues), items.as_slice());
    }
}
