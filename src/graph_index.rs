//! In-memory person/movie indices. Built once at load, read-only during search.

use std::collections::{HashMap, HashSet};

pub type PersonId = String;
pub type MovieId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub birth: String,
    pub movies: HashSet<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: String,
    pub stars: HashSet<PersonId>,
}

/// The three lookups the search core reads: lower-cased name -> person ids,
/// person id -> person, movie id -> movie.
#[derive(Debug, Default, Clone)]
pub struct GraphIndex {
    names: HashMap<String, HashSet<PersonId>>,
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
}

impl GraphIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a person. Links to movies are dropped on replace.
    pub fn insert_person(&mut self, id: &str, name: &str, birth: &str) {
        if let Some(old) = self.people.get(id) {
            let old_key = old.name.to_lowercase();
            if let Some(ids) = self.names.get_mut(&old_key) {
                ids.remove(id);
                if ids.is_empty() {
                    self.names.remove(&old_key);
                }
            }
            for movie_id in &old.movies {
                if let Some(movie) = self.movies.get_mut(movie_id) {
                    movie.stars.remove(id);
                }
            }
        }

        self.people.insert(
            id.to_string(),
            Person { name: name.to_string(), birth: birth.to_string(), movies: HashSet::new() },
        );
        self.names.entry(name.to_lowercase()).or_default().insert(id.to_string());
    }

    /// Inserts or replaces a movie. Links to people are dropped on replace.
    pub fn insert_movie(&mut self, id: &str, title: &str, year: &str) {
        if let Some(old) = self.movies.get(id) {
            for person_id in &old.stars {
                if let Some(person) = self.people.get_mut(person_id) {
                    person.movies.remove(id);
                }
            }
        }

        self.movies.insert(
            id.to_string(),
            Movie { title: title.to_string(), year: year.to_string(), stars: HashSet::new() },
        );
    }

    /// Records that a person starred in a movie. Returns false (and changes
    /// nothing) if either id is unknown.
    pub fn link(&mut self, person_id: &str, movie_id: &str) -> bool {
        if !self.people.contains_key(person_id) || !self.movies.contains_key(movie_id) {
            return false;
        }
        if let Some(person) = self.people.get_mut(person_id) {
            person.movies.insert(movie_id.to_string());
        }
        if let Some(movie) = self.movies.get_mut(movie_id) {
            movie.stars.insert(person_id.to_string());
        }
        true
    }

    /// Case-insensitive exact name lookup.
    pub fn person_ids_for_name(&self, name: &str) -> Option<&HashSet<PersonId>> {
        self.names.get(&name.to_lowercase())
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }
}
