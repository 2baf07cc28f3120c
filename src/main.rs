fn main() {
    showroom::app::cli::run();
}
