pub mod render_port;
