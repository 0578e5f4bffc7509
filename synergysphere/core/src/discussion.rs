//! Project discussion: an append-only message log.

use crate::id::{IdClock, RecordId};
use crate::identity::CurrentUser;
use crate::is_blank;
use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Author {
    pub id: RecordId,
    pub name: String,
    pub avatar: Option<String>,
}

impl Author {
    /// The acting user, or the anonymous "You" author when nobody is signed in.
    pub fn from_user(user: Option<&CurrentUser>) -> Self {
        match user {
            Some(user) => Author {
                id: user.id.clone(),
                name: user.name.clone(),
                avatar: user.avatar.clone(),
            },
            None => Author {
                id: "1".to_string(),
                name: "You".to_string(),
                avatar: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    pub id: RecordId,
    pub author: Author,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discussion {
    messages: Vec<Message>,
    ids: IdClock,
}

impl Discussion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discussion with the two seed messages of the project detail page.
    pub fn seeded() -> Self {
        Discussion {
            messages: seed_messages(),
            ids: IdClock::new(),
        }
    }

    /// Messages in the order they were posted.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a message from `author`. Blank content is ignored and returns false.
    #[instrument(skip(self, content, author), fields(author = %author.name))]
    pub fn post_message(&mut self, content: &str, author: Author, now: DateTime<Utc>) -> bool {
        if is_blank(content) {
            debug!("ignoring blank message");
            return false;
        }
        let message = Message {
            id: self.ids.next(now),
            author,
            content: content.to_string(),
            timestamp: now,
        };
        debug!(message_id = %message.id, "message posted");
        self.messages.push(message);
        true
    }
}

fn seed_messages() -> Vec<Message> {
    let roster = crate::task::seed_roster();
    let author = |index: usize| Author {
        id: roster[index].id.clone(),
        name: roster[index].name.clone(),
        avatar: roster[index].avatar.clone(),
    };
    vec![
        Message {
            id: "1".to_string(),
            author: author(0),
            content: "Just finished the wireframes! Ready for review.".to_string(),
            timestamp: seed_instant(2024, 2, 8, 10, 30),
        },
        Message {
            id: "2".to_string(),
            author: author(1),
            content: "Great work! I'll start on the navigation component today.".to_string(),
            timestamp: seed_instant(2024, 2, 8, 11, 15),
        },
    ]
}

pub(crate) fn seed_instant(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        seed_instant(2024, 2, 9, 9, 0)
    }

    #[test]
    fn seeded_discussion_has_two_messages() {
        let discussion = Discussion::seeded();

        assert_eq!(discussion.len(), 2);
        assert_eq!(discussion.messages()[0].author.name, "John Doe");
        assert_eq!(discussion.messages()[1].author.name, "Sarah Chen");
    }

    #[test]
    fn post_message_stamps_author_and_time() {
        let mut discussion = Discussion::seeded();
        let user = CurrentUser::demo();

        let posted = discussion.post_message("Looks good", Author::from_user(Some(&user)), now());

        assert!(posted);
        let message = discussion.messages().last().unwrap();
        assert_eq!(message.content, "Looks good");
        assert_eq!(message.author.id, user.id);
        assert_eq!(message.author.name, user.name);
        assert_eq!(message.timestamp, now());
    }

    #[test]
    fn anonymous_author_is_you() {
        let author = Author::from_user(None);

        assert_eq!(author.id, "1");
        assert_eq!(author.name, "You");
        assert_eq!(author.avatar, None);
    }

    #[test]
    fn blank_message_is_ignored() {
        let mut discussion = Discussion::seeded();

        let posted = discussion.post_message(" \n ", Author::from_user(None), now());

        assert!(!posted);
        assert_eq!(discussion, Discussion::seeded());
    }

    #[test]
    fn messages_keep_posting_order() {
        let mut discussion = Discussion::new();

        discussion.post_message("M1", Author::from_user(None), now());
        discussion.post_message("M2", Author::from_user(None), now());

        let contents: Vec<_> = discussion
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["M1", "M2"]);
    }
}
