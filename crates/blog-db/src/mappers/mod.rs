//! Entity <-> model mappers

mod like;
