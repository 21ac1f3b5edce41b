use std::collections::VecDeque;
use std::time::Instant;

use town_graph_core::{Graph, Town};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let town_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: town-graph-bench [mode] [town_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  grid        Square street grid with random block lengths");
        println!("  smallworld  Ring of towns with local roads + random highways");
        println!("  random      Erdos-Renyi uniform random roads");
        println!("  sprawl      Organic growth around a recent-town surface");
        println!();
        println!("Default town_count: 100000");
        return;
    }

    if town_count < 2 {
        eprintln!("town_count must be at least 2");
        return;
    }

    println!("town-graph-bench");
    println!("================");
    println!();

    let generators: Vec<(&str, fn(u64) -> Graph)> = match mode {
        "grid" => vec![("Street grid", gen_grid)],
        "smallworld" => vec![("Small-world (ring + highways)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "sprawl" => vec![("Sprawl (organic growth)", gen_sprawl)],
        "all" => vec![
            ("Street grid", gen_grid as fn(u64) -> Graph),
            ("Small-world (ring + highways)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Sprawl (organic growth)", gen_sprawl),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, town_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Graph, town_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} towns", town_count);

    let t = Instant::now();
    let graph = generator(town_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} towns, {} roads",
        gen_time.as_secs_f64(),
        graph.town_count(),
        graph.road_count(),
    );

    let source = town(0);
    let far_town = town(town_count - 1);

    let t = Instant::now();
    match town_graph_core::dijkstra(&graph, &source) {
        Ok(tree) => println!(
            "Dijkstra from {}: reached {} towns in {:.1}ms",
            source,
            tree.reached(),
            t.elapsed().as_secs_f64() * 1000.0
        ),
        Err(e) => println!("Dijkstra from {}: {}", source, e),
    }

    let t = Instant::now();
    let route = town_graph_core::shortest_route(&graph, &source, &far_town);
    let elapsed = t.elapsed();
    match route {
        Ok(r) if !r.is_empty() => println!(
            "Shortest route {} → {}: {} hops, {} mi in {:.1}ms",
            source,
            far_town,
            r.hops.len(),
            r.total_distance,
            elapsed.as_secs_f64() * 1000.0
        ),
        Ok(_) => println!(
            "Shortest route {} → {}: no route ({:.1}ms)",
            source,
            far_town,
            elapsed.as_secs_f64() * 1000.0
        ),
        Err(e) => println!("Shortest route {} → {}: {}", source, far_town, e),
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    /// Road length in miles, 1..=max.
    fn miles(&mut self, max: u64) -> u32 {
        (self.next(max) + 1) as u32
    }
}

fn town(i: u64) -> Town {
    Town::new(format!("T{}", i))
}

fn with_towns(town_count: u64) -> Graph {
    let mut graph = Graph::with_capacity(town_count as usize);
    for i in 0..town_count {
        graph.add_vertex(town(i));
    }
    graph
}

fn connect(graph: &mut Graph, a: u64, b: u64, miles: u32) {
    graph.add_edge(town(a), town(b), miles, format!("R{}-{}", a, b));
}

/// Square grid: each town joins its right and lower neighbour.
///
/// Many equal-hop routes with different lengths; exercises frontier churn.
fn gen_grid(town_count: u64) -> Graph {
    let side = (town_count as f64).sqrt().ceil() as u64;
    let mut graph = with_towns(town_count);
    let mut rng = FastRng::new(42);

    for i in 0..town_count {
        let (row, col) = (i / side, i % side);
        if col + 1 < side && i + 1 < town_count {
            connect(&mut graph, i, i + 1, rng.miles(10));
        }
        if row + 1 < side && i + side < town_count {
            connect(&mut graph, i, i + side, rng.miles(10));
        }
    }

    graph
}

/// Small-world: ring lattice of short local roads, plus long highways
/// rewired to random towns with probability p.
fn gen_small_world(town_count: u64) -> Graph {
    let k = 3u64; // neighbours on each side
    let p = 0.05f64; // highway probability
    let mut graph = with_towns(town_count);
    let mut rng = FastRng::new(67890);

    for i in 0..town_count {
        for j in 1..=k {
            let neighbour = (i + j) % town_count;
            if rng.next_f64() < p {
                let far = rng.next(town_count);
                if far != i {
                    connect(&mut graph, i, far, rng.miles(50) + 20);
                    continue;
                }
            }
            if neighbour != i {
                connect(&mut graph, i, neighbour, rng.miles(5));
            }
        }
    }

    graph
}

/// Erdos-Renyi: ~4 random roads per town, no structure.
fn gen_random(town_count: u64) -> Graph {
    let target_roads = town_count * 4;
    let mut graph = with_towns(town_count);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_roads {
        let a = rng.next(town_count);
        let b = rng.next(town_count);
        if a != b {
            connect(&mut graph, a, b, rng.miles(30));
        }
    }

    graph
}

/// Sprawl: each new town attaches to a recently added one, with occasional
/// bypasses back into older parts of the network. Produces long winding routes.
fn gen_sprawl(town_count: u64) -> Graph {
    let mut graph = with_towns(town_count);
    let mut rng = FastRng::new(77777);

    let surface_max = 1000usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_town in 1..town_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        connect(&mut graph, new_town, attach_to, rng.miles(8));

        // 10% chance of a bypass
        if rng.next(10) == 0 && new_town > 1 {
            let other = rng.next(new_town);
            if other != attach_to {
                connect(&mut graph, new_town, other, rng.miles(40));
            }
        }

        surface.push_back(new_town);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    graph
}
