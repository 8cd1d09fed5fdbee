fn main() {
    flask_svelte::app::cli::run();
}
