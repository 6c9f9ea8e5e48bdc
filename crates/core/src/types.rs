/// Product and game identifiers are PostgreSQL `INTEGER`, which is also the
/// width of a GraphQL `Int`.
pub type DbId = i32;

/// Activity / visibility flags are stored as `SMALLINT`.
pub type Flag = i16;
