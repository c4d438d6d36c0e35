pub mod day;
pub mod exercise_detail;
pub mod follow;
pub mod routine;
pub mod routine_like;
pub mod routine_scrap;
pub mod user;

/*
 A user is identified by email (nickname is unique too and used for public
 profiles). Routines belong to a user and exclusively own their days and
 exercise details. Likes, scraps and follows are composite-key join rows that
 reference users/routines but never own them; the composite primary keys are
 what make "like twice" impossible at the storage level.
 */
