fn main() {
    env_logger::init();
    if let Err(e) = spo_auth::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
