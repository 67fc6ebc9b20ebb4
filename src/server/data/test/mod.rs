mod favorite;
mod people;
mod planet;
mod token_blocked_list;
mod user;
mod vehicle;
