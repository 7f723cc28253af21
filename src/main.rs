fn main() {
    wfseed::app::cli::run();
}
