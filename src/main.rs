use dancebot::App;

fn main() -> dancebot::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    App::new().with_title("Dancing Robot").run()
}
