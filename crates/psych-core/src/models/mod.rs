pub mod case;
pub mod glossary;
pub mod personality;
pub mod quiz;
pub mod route;
