pub mod register_server;
