//! Turns a typed name into exactly one person id.

use tracing::debug;

use crate::error::ResolveError;
use crate::graph_index::{GraphIndex, PersonId};

/// One person sharing an ambiguous name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: String,
}

/// Asks someone to pick between people with the same name.
pub trait Disambiguate {
    /// `candidates` is sorted by id. Returns the chosen id, or `None` if no
    /// choice was made.
    fn choose(&mut self, name: &str, candidates: &[Candidate]) -> Option<String>;
}

impl<F> Disambiguate for F
where
    F: FnMut(&str, &[Candidate]) -> Option<String>,
{
    fn choose(&mut self, name: &str, candidates: &[Candidate]) -> Option<String> {
        self(name, candidates)
    }
}

/// Resolves `name` (case-insensitive, exact) to one person id. With several
/// matches `chooser` decides; a choice outside the candidates is rejected.
pub fn person_id_for_name(
    index: &GraphIndex,
    name: &str,
    chooser: &mut dyn Disambiguate,
) -> Result<PersonId, ResolveError> {
    let ids = match index.person_ids_for_name(name) {
        Some(ids) if !ids.is_empty() => ids,
        _ => return Err(ResolveError::NotFound { name: name.to_string() }),
    };

    if ids.len() == 1 {
        if let Some(id) = ids.iter().next() {
            return Ok(id.clone());
        }
    }

    let mut candidates: Vec<Candidate> = ids
        .iter()
        .filter_map(|id| {
            index.person(id).map(|person| Candidate {
                id: id.clone(),
                name: person.name.clone(),
                birth: person.birth.clone(),
            })
        })
        .collect();
    candidates.sort_by(|a, b| a.id.cmp(&b.id));
    debug!(name, candidates = candidates.len(), "ambiguous name");

    let choice = chooser.choose(name, &candidates).map(|c| c.trim().to_string());
    match choice {
        Some(choice) if ids.contains(&choice) => Ok(choice),
        choice => Err(ResolveError::InvalidChoice { name: name.to_string(), choice }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> GraphIndex {
        let mut index = GraphIndex::new();
        index.insert_person("102", "Kevin Bacon", "1958");
        index.insert_person("7", "John Smith", "1950");
        index.insert_person("8", "John Smith", "1980");
        index
    }

    fn never(_: &str, _: &[Candidate]) -> Option<String> {
        panic!("chooser should not be asked")
    }

    #[test]
    fn test_unique_name() {
        assert_eq!(person_id_for_name(&index(), "KEVIN BACON", &mut never).unwrap(), "102");
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            person_id_for_name(&index(), "Nobody", &mut never),
            Err(ResolveError::NotFound { name: "Nobody".to_string() })
        );
    }

    #[test]
    fn test_ambiguous_name_lists_candidates() {
        let mut seen = Vec::new();
        let mut chooser = |name: &str, candidates: &[Candidate]| {
            assert_eq!(name, "john smith");
            seen = candidates.to_vec();
            Some("8".to_string())
        };

        assert_eq!(person_id_for_name(&index(), "john smith", &mut chooser).unwrap(), "8");
        let births: Vec<&str> = seen.iter().map(|c| c.birth.as_str()).collect();
        assert_eq!(births, vec!["1950", "1980"]);
    }

    #[test]
    fn test_ambiguous_name_rejects_outside_choice() {
        let mut chooser = |_: &str, _: &[Candidate]| Some("102".to_string());
        assert_eq!(
            person_id_for_name(&index(), "John Smith", &mut chooser),
            Err(ResolveError::InvalidChoice {
                name: "John Smith".to_string(),
                choice: Some("102".to_string())
            })
        );

        let mut silent = |_: &str, _: &[Candidate]| -> Option<String> { None };
        assert!(matches!(
            person_id_for_name(&index(), "John Smith", &mut silent),
            Err(ResolveError::InvalidChoice { choice: None, .. })
        ));
    }
}
