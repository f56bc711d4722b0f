mod command;
mod model;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    command::run()
}
