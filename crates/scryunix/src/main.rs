fn main() {
    std::process::exit(scryunix::app::run(std::env::args_os()));
}
