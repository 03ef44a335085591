//! TritSet - CLI Entry Point
//!
//! Commands:
//! - `tritset eval <left> <op> [right]` - Apply and/or/not/eq to parsed sets
//! - `tritset stats <set>` - Length, capacity and cardinality of a set
//! - `tritset grid distance|neighbors` - Grid helper queries
//! - `tritset test` - Built-in self-test

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, error};
use tritset::{clamp_trim, Cardinality, Plane, Point, Trit, TritSet};

#[derive(Parser)]
#[command(name = "tritset")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Bit-packed three-valued (Kleene) trit sets")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a logical operator to one or two sets (e.g. `TFU and UTT`)
    Eval {
        /// Left operand, one character per trit (T/F/U)
        left: String,
        /// Operator to apply
        #[arg(value_enum)]
        op: Op,
        /// Right operand (not used by `not`)
        right: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show length, capacity and cardinality of a set
    Stats {
        /// The set, one character per trit (T/F/U)
        set: String,
        /// Trim the set to this many trits first (negative trims everything)
        #[arg(long, allow_hyphen_values = true)]
        trim: Option<i64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Query the grid helper
    Grid {
        /// Plane width
        #[arg(long)]
        width: usize,
        /// Plane height
        #[arg(long)]
        height: usize,
        #[command(subcommand)]
        query: GridQuery,
    },
    /// Run the built-in self-test
    Test,
}

#[derive(Subcommand)]
enum GridQuery {
    /// Manhattan distance between two points
    Distance { x1: usize, y1: usize, x2: usize, y2: usize },
    /// On-plane neighbors of a point
    Neighbors { x: usize, y: usize },
}

#[derive(Clone, Copy, ValueEnum)]
enum Op {
    And,
    Or,
    Not,
    Eq,
}

/// What `eval` and `stats` print.
#[derive(Serialize)]
struct SetReport {
    set: String,
    length: usize,
    capacity: usize,
    cardinality: Cardinality,
}

impl SetReport {
    fn new(set: &TritSet) -> Self {
        Self {
            set: set.to_string(),
            length: set.len(),
            capacity: set.capacity(),
            cardinality: set.cardinality(),
        }
    }

    fn print(&self, json: bool) {
        if json {
            match serde_json::to_string_pretty(self) {
                Ok(s) => println!("{}", s),
                Err(e) => {
                    eprintln!("❌ Failed to encode report: {}", e);
                    std::process::exit(1);
                }
            }
            return;
        }
        println!("Set:         {}", if self.set.is_empty() { "(empty)" } else { self.set.as_str() });
        println!("Length:      {}", self.length);
        println!("Capacity:    {} word(s)", self.capacity);
        println!(
            "Cardinality: T={} F={} U={}",
            self.cardinality[Trit::True],
            self.cardinality[Trit::False],
            self.cardinality[Trit::Unknown]
        );
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level_filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::WARN);

    tracing_subscriber::fmt()
        .with_max_level(log_level_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Eval { left, op, right, json }) => {
            eval(&left, op, right.as_deref(), json);
        }
        Some(Commands::Stats { set, trim, json }) => {
            stats(&set, trim, json);
        }
        Some(Commands::Grid { width, height, query }) => {
            grid(Plane::new(width, height), query);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("TritSet v0.1.0");
            println!("Bit-packed three-valued logic sets");
            println!();
            println!("Use --help for available commands");
            println!();
            demo();
        }
    }
}

fn parse_or_exit(text: &str) -> TritSet {
    match text.parse::<TritSet>() {
        Ok(set) => {
            debug!(length = set.len(), capacity = set.capacity(), "parsed operand");
            set
        }
        Err(e) => {
            error!("Failed to parse {:?}: {}", text, e);
            eprintln!("❌ Invalid set {:?}: {}", text, e);
            std::process::exit(1);
        }
    }
}

fn eval(left: &str, op: Op, right: Option<&str>, json: bool) {
    let a = parse_or_exit(left);

    if let Op::Not = op {
        SetReport::new(&!&a).print(json);
        return;
    }

    let Some(right) = right else {
        eprintln!("❌ This operator needs a right operand");
        std::process::exit(1);
    };
    let b = parse_or_exit(right);

    let result = match op {
        Op::And => &a & &b,
        Op::Or => &a | &b,
        Op::Eq => {
            let equal = a == b;
            if json {
                println!("{}", serde_json::json!({ "equal": equal }));
            } else {
                println!("{}", if equal { "equal" } else { "not equal" });
            }
            return;
        }
        Op::Not => unreachable!(),
    };
    SetReport::new(&result).print(json);
}

fn stats(text: &str, trim: Option<i64>, json: bool) {
    let mut set = parse_or_exit(text);
    if let Some(n) = trim {
        set.trim(clamp_trim(n));
    }
    SetReport::new(&set).print(json);
}

fn grid(plane: Plane, query: GridQuery) {
    match query {
        GridQuery::Distance { x1, y1, x2, y2 } => {
            println!("{}", plane.distance(Point::new(x1, y1), Point::new(x2, y2)));
        }
        GridQuery::Neighbors { x, y } => {
            let neighbors = plane.neighbors(Point::new(x, y));
            if neighbors.is_empty() {
                println!("(none)");
            }
            for p in neighbors {
                println!("{}", p);
            }
        }
    }
}

fn demo() {
    println!("━━━ Kleene Trit Demo ━━━");
    println!();

    let mut a = TritSet::with_size(10);
    for i in [3, 6, 7] {
        a.set(i, Trit::False);
    }
    for i in [2, 4] {
        a.set(i, Trit::True);
    }
    let mut b = TritSet::with_size(10);
    for i in [3, 4, 8] {
        b.set(i, Trit::True);
    }
    for i in [1, 6] {
        b.set(i, Trit::False);
    }

    println!("  A     = {}  (length {}, capacity {})", a, a.len(), a.capacity());
    println!("  B     = {}  (length {}, capacity {})", b, b.len(), b.capacity());
    println!("  A & B = {}", &a & &b);
    println!("  A | B = {}", &a | &b);
    println!("  !A    = {}", !&a);
    println!();

    let mut big = TritSet::with_size(1000);
    println!("Demand-driven growth:");
    println!("  new set of size 1000      capacity {}", big.capacity());
    big.set(1_000_000, Trit::Unknown);
    println!("  set[1000000] = Unknown    capacity {}", big.capacity());
    big.set(1_000_000, Trit::True);
    println!("  set[1000000] = True       capacity {}", big.capacity());
    big.set(1_000_000, Trit::Unknown);
    println!("  set[1000000] = Unknown    capacity {} length {}", big.capacity(), big.len());
    big.shrink();
    println!("  shrink()                  capacity {}", big.capacity());
    println!();

    println!("✓ Core trit set operations working!");
}

fn run_self_test() {
    println!("━━━ TritSet Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    let mut check = |name: &str, ok: bool| {
        print!("{}... ", name);
        if ok {
            println!("✓");
            passed += 1;
        } else {
            println!("✗");
            failed += 1;
        }
    };

    // Test 1: Negation involution
    check("Trit negation involution", Trit::ALL.iter().all(|&t| !!t == t));

    // Test 2: Fresh sets allocate nothing
    let fresh = TritSet::with_size(1000);
    check("Demand-driven allocation", fresh.capacity() == 0 && fresh.len() == 0);

    // Test 3: Unknown writes past the end are no-ops
    let mut set = TritSet::new();
    set.set(1_000, Trit::Unknown);
    check("Unknown write is a no-op", set.capacity() == 0);

    // Test 4: Growth and length rescan
    set.set(20, Trit::True);
    set.set(3, Trit::False);
    let grown = set.capacity();
    set.set(20, Trit::Unknown);
    check("Length rescan on clear", set.len() == 4 && set.capacity() == grown);

    // Test 5: Shrink
    set.shrink();
    check("Shrink to minimum", set.capacity() == 1);

    // Test 6: Operators
    let a: TritSet = "UUTFTUFF".parse().unwrap_or_default();
    let b: TritSet = "UFUTTUFUT".parse().unwrap_or_default();
    check("Kleene AND", (&a & &b).to_string() == "UFUFTUFF");
    check("Kleene OR", (&a | &b).to_string() == "UUTTTUFUT");

    // Test 7: Cardinality
    let card = a.cardinality();
    check(
        "Cardinality",
        card[Trit::True] == 2 && card[Trit::False] == 3 && card[Trit::Unknown] == 3,
    );

    // Test 8: Grid helper
    let plane = Plane::new(3, 3);
    check(
        "Grid distance and neighbors",
        plane.distance(Point::new(0, 0), Point::new(2, 1)) == 3
            && plane.neighbors(Point::new(1, 1)).len() == 4,
    );

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
