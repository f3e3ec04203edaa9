mod users_service;

pub use users_service::{
    canned_user, CannedUsersService, StoredUsersService, UsersService, CANNED_USER_EMAIL,
    CANNED_USER_ID, CANNED_USER_NAME,
};
