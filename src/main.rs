fn main() {
    if let Err(err) = studio_schedule::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
