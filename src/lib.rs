//! Degrees of separation between people in a person/movie dataset.
//!
//! Load a directory with [`data_loading::load_directory`], turn typed names
//! into ids with [`person_resolver::person_id_for_name`], then connect them
//! with [`search::shortest_path`].

pub mod console;
pub mod data_loading;
pub mod error;
pub mod graph_index;
pub mod person_resolver;
pub mod report;
pub mod search;

pub use error::{DataError, ResolveError, SearchError};
pub use graph_index::{GraphIndex, Movie, MovieId, Person, PersonId};
pub use search::{shortest_path, Path, SearchReport, Strategy};
