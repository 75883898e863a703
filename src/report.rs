//! Human-readable lines for a found path.

use crate::graph_index::{GraphIndex, MovieId, PersonId};

pub fn degrees_line(path: &[(MovieId, PersonId)]) -> String {
    format!("{} degrees of separation.", path.len())
}

/// One line per hop: `"{i}: {person1} and {person2} starred in {movie}"`.
/// Ids missing from the index are printed as-is.
pub fn render_path(index: &GraphIndex, source: &str, path: &[(MovieId, PersonId)]) -> Vec<String> {
    let person_name = |id: &str| index.person(id).map_or_else(|| id.to_string(), |p| p.name.clone());
    let movie_title = |id: &str| index.movie(id).map_or_else(|| id.to_string(), |m| m.title.clone());

    let mut previous = source;
    let mut lines = Vec::with_capacity(path.len());
    for (i, (movie_id, person_id)) in path.iter().enumerate() {
        lines.push(format!(
            "{}: {} and {} starred in {}",
            i + 1,
            person_name(previous),
            person_name(person_id.as_str()),
            movie_title(movie_id.as_str())
        ));
        previous = person_id.as_str();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Path;

    #[test]
    fn test_render_path() {
        let mut index = GraphIndex::new();
        index.insert_person("1", "Kevin Bacon", "1958");
        index.insert_person("2", "Tom Hanks", "1956");
        index.insert_person("3", "Sally Field", "1946");
        index.insert_movie("10", "Apollo 13", "1995");
        index.insert_movie("20", "Forrest Gump", "1994");

        let path: Path = vec![("10".into(), "2".into()), ("20".into(), "3".into())];
        assert_eq!(degrees_line(&path), "2 degrees of separation.");
        assert_eq!(
            render_path(&index, "1", &path),
            vec![
                "1: Kevin Bacon and Tom Hanks starred in Apollo 13".to_string(),
                "2: Tom Hanks and Sally Field starred in Forrest Gump".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_empty_path() {
        let index = GraphIndex::new();
        assert!(render_path(&index, "1", &[]).is_empty());
        assert_eq!(degrees_line(&[]), "0 degrees of separation.");
    }
}
