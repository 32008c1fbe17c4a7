use clap::{Parser, Subcommand};
use kdtree2d::config::LoggingConfig;
use kdtree2d::input::{check_domain, load_points};
use kdtree2d::output::{OutputFormat, OutputFormatter};
use kdtree2d::{KdTree, KdTreeConfig, KdTreeError, Point, PointSet, Rectangle, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Range and nearest-neighbour queries over a 2d-tree", long_about = None)]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "kdtree.toml")]
    config: String,

    /// 用暴力点集核对查询结果（覆盖配置文件）
    #[arg(long)]
    verify: bool,

    /// 建树后检查结构不变量
    #[arg(long)]
    check: bool,

    /// 以 JSON 输出（覆盖配置文件）
    #[arg(long)]
    json: bool,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 列出矩形内的所有点
    Range {
        points: PathBuf,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },
    /// 查找最近的点
    Nearest { points: PathBuf, x: f64, y: f64 },
    /// 打印树的大小、高度与结构
    Stats { points: PathBuf },
    /// 生成默认配置文件并退出
    GenerateConfig,
}

fn main() {
    let args = Args::parse();
    let json = args.json;
    if let Err(e) = run(args) {
        let format = if json { OutputFormat::Json } else { OutputFormat::Text };
        eprintln!("{}", OutputFormatter::new(format).format_error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if let Command::GenerateConfig = args.command {
        KdTreeConfig::default().save_to_file(&args.config)?;
        println!("Generated default configuration: {}", args.config);
        return Ok(());
    }

    // 加载配置，命令行参数覆盖配置文件
    let mut config = KdTreeConfig::from_file(&args.config)?;
    if args.verify {
        config.query.verify = true;
    }
    if args.json {
        config.query.output = "json".to_string();
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    init_logging(&config.logging)?;

    let format = OutputFormat::from_name(&config.query.output).unwrap_or(OutputFormat::Text);
    let formatter = OutputFormatter::new(format);

    match args.command {
        Command::Range {
            points,
            xmin,
            ymin,
            xmax,
            ymax,
        } => {
            let query = Rectangle::try_new(xmin, ymin, xmax, ymax)?;
            let (tree, brute) = build(&points, &config, args.check)?;

            let mut found: Vec<Point> = tree.range(&query).collect();
            found.sort();
            if let Some(brute) = brute {
                let expected = brute.range(&query);
                if expected != found {
                    return Err(KdTreeError::Invariant(format!(
                        "range mismatch: tree found {}, brute force found {}",
                        found.len(),
                        expected.len()
                    )));
                }
                info!("range result verified against brute force");
            }
            println!("{}", formatter.format_range(&query, &found));
        }
        Command::Nearest { points, x, y } => {
            let target = Point::try_new(x, y)?;
            let (tree, brute) = build(&points, &config, args.check)?;

            let (nearest, stats) = tree.nearest_with_stats(&target);
            if let Some(brute) = brute {
                let expected = brute.nearest(&target).map(|p| p.distance_squared_to(&target));
                let actual = nearest.map(|p| p.distance_squared_to(&target));
                if expected != actual {
                    return Err(KdTreeError::Invariant(format!(
                        "nearest mismatch: tree {:?}, brute force {:?}",
                        actual, expected
                    )));
                }
                info!("nearest result verified against brute force");
            }
            println!("{}", formatter.format_nearest(&target, nearest, &stats));
        }
        Command::Stats { points } => {
            let (tree, _) = build(&points, &config, args.check)?;
            println!("{}", formatter.format_stats(tree.len(), tree.height()));
            if format == OutputFormat::Text {
                print!("{}", tree.dump_structure(config.query.dump_depth));
            }
        }
        // 已在加载配置前处理
        Command::GenerateConfig => {}
    }

    Ok(())
}

/// 加载点文件并建树；开启核对时同时构建暴力点集
fn build(path: &Path, config: &KdTreeConfig, check: bool) -> Result<(KdTree, Option<PointSet>)> {
    let points = load_points(path)?;
    if config.tree.reject_out_of_domain {
        check_domain(&points)?;
    }

    let tree: KdTree = points.iter().copied().collect();
    if tree.len() < points.len() {
        warn!(duplicates = points.len() - tree.len(), "duplicate points ignored");
    }
    info!(size = tree.len(), height = tree.height(), "tree built");

    if check {
        tree.check_invariants()?;
        info!("tree invariants hold");
    }

    let brute = if config.query.verify {
        Some(points.into_iter().collect::<PointSet>())
    } else {
        None
    };
    Ok((tree, brute))
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
        _ => {
            // 日志写到 stderr，stdout 只留给查询结果
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }
    Ok(())
}
