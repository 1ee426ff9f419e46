fn main() {
    if let Err(err) = schema_annotate::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
