pub mod register_user_cmd;
