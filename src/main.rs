mod app;
mod logging;

fn main() {
    let args = treewalk::cli::parse();
    std::process::exit(app::run(args));
}
