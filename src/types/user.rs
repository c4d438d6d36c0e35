use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub nickname: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub email: String,
    pub nickname: String,
}
