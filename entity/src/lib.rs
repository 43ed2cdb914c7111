pub mod movie;
pub mod user;

/*
 A user owns zero or more movies. Deleting a user takes their movies with it
 (cascade). Movies always belong to exactly one user; the title is unique
 within that user's collection, so two users can both track "Titanic" but one
 user cannot add it twice.
 */
