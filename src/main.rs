use anyhow::Result;
use generate_questions::utils::logger;
use generate_questions::{App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init(config.verbose_logging);

    let app = App::initialize(config)?;
    let summary = app.run()?;

    println!("{}", app.summary_line(&summary));

    Ok(())
}
