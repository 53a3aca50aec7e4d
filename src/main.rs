#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    console::render_fields, init_logging, CliPlayer, GameEngine, GameStatus, InMemoryTransport,
    Player, RandomPlayer, Role, Session, TcpTransport, DEFAULT_PORT,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Random,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Host a game and wait for an opponent to connect. The host shoots first.
    Host {
        #[arg(long, default_value_t = format!("0.0.0.0:{}", DEFAULT_PORT))]
        bind: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Join a game hosted by another player.
    Join {
        #[arg(long, default_value_t = format!("127.0.0.1:{}", DEFAULT_PORT))]
        connect: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two random players fight on this machine.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn make_player(kind: PlayerType) -> Box<dyn Player> {
    match kind {
        PlayerType::Human => Box::new(CliPlayer::new()),
        PlayerType::Random => Box::new(RandomPlayer::new()),
    }
}

#[cfg(feature = "std")]
fn new_engine(rng: &mut SmallRng) -> anyhow::Result<GameEngine> {
    let mut engine = GameEngine::new();
    engine.place_fleet(rng).map_err(|e| anyhow::anyhow!(e))?;
    Ok(engine)
}

#[cfg(feature = "std")]
fn announce(session: &Session) {
    println!();
    print!(
        "{}",
        render_fields(session.engine().own_grid(), session.engine().enemy_grid())
    );
    match session.status() {
        GameStatus::Won => println!("\nVICTORY! You have sunk the whole enemy fleet."),
        GameStatus::Lost => println!("\nDEFEAT. Your whole fleet has been sunk."),
        GameStatus::InProgress => {}
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Host { bind, player, seed } => {
            let mut rng = make_rng(seed);
            let engine = new_engine(&mut rng)?;

            let listener = TcpListener::bind(&bind).await?;
            println!("Hosting at {}, waiting for an opponent...", listener.local_addr()?);
            let (stream, addr) = listener.accept().await?;
            stream.set_nodelay(true)?;
            println!("Opponent connected from {}", addr);

            let transport = Box::new(TcpTransport::new(stream));
            let mut session = Session::new(make_player(player), engine, transport);
            let result = session.run(&mut rng, Role::Host).await;
            announce(&session);
            if let Err(e) = result {
                eprintln!("Game ended with an error: {}", e);
            }
        }
        Commands::Join {
            connect,
            player,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let engine = new_engine(&mut rng)?;

            println!("Connecting to {}...", connect);
            let transport = Box::new(TcpTransport::connect(&connect).await?);
            println!("Connected.");

            let mut session = Session::new(make_player(player), engine, transport);
            let result = session.run(&mut rng, Role::Guest).await;
            announce(&session);
            if let Err(e) = result {
                eprintln!("Game ended with an error: {}", e);
            }
        }
        Commands::Local { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut host_rng = make_rng(seed);
            let mut guest_rng = make_rng(seed.map(|s| s.wrapping_add(1)));
            let host_engine = new_engine(&mut host_rng)?;
            let guest_engine = new_engine(&mut guest_rng)?;

            let (t1, t2) = InMemoryTransport::pair();
            let mut host = Session::new(Box::new(RandomPlayer::new()), host_engine, Box::new(t1));
            let mut guest =
                Session::new(Box::new(RandomPlayer::new()), guest_engine, Box::new(t2));

            tokio::try_join!(
                host.run(&mut host_rng, Role::Host),
                guest.run(&mut guest_rng, Role::Guest)
            )?;

            println!("Host view:");
            announce(&host);
            println!(
                "Host fired {} shots, guest fired {} shots.",
                host.engine().shots_fired(),
                guest.engine().shots_fired()
            );
        }
    }
    Ok(())
}
