use serde::{Deserialize, Serialize};

/// Author identity of a media record. Backed by the record's own
/// `author_name` / `author_email` columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Mutable view over the author columns of a record. Writes land directly in
/// the record.
#[derive(Debug)]
pub struct AuthorMut<'a> {
    pub name: &'a mut String,
    pub email: &'a mut String,
}

impl AuthorMut<'_> {
    pub fn get(&self) -> Author {
        Author::new(self.name.clone(), self.email.clone())
    }
}

/// Accumulated rating of a media record, backed by `rating_sum` /
/// `rating_votes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rating {
    pub sum: i32,
    pub votes: i32,
}

impl Rating {
    pub fn new(sum: i32, votes: i32) -> Self {
        Self { sum, votes }
    }

    pub fn add_vote(&mut self, score: i32) {
        self.sum += score;
        self.votes += 1;
    }

    pub fn average(&self) -> Option<f64> {
        if self.votes == 0 {
            return None;
        }
        Some(f64::from(self.sum) / f64::from(self.votes))
    }
}

#[derive(Debug)]
pub struct RatingMut<'a> {
    pub sum: &'a mut i32,
    pub votes: &'a mut i32,
}

impl RatingMut<'_> {
    pub fn get(&self) -> Rating {
        Rating::new(*self.sum, *self.votes)
    }

    pub fn add_vote(&mut self, score: i32) {
        *self.sum += score;
        *self.votes += 1;
    }
}
