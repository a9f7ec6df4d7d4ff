use std::{error::Error, io::Write, path::Path};

use paretic::{
  evaluate_population,
  operator::ParBatch,
  pareto_front,
  selection::{TournamentSelector, WorstSelector},
  Genotype,
  Individual,
  Nsga2Scores,
  Nsga2Selector,
  Objective,
  Selector,
};
use rand::prelude::*;
use rand_distr::StandardNormal;

const POPULATION: usize = 100;
const GENERATIONS: usize = 100;

// a point of the search space `0 <= x <= 5`, `0 <= y <= 3`
#[derive(Clone, Copy, Debug)]
struct Point {
  x: f64,
  y: f64,
}

impl Point {
  fn clamped(x: f64, y: f64) -> Self {
    Self {
      x: x.clamp(0.0, 5.0),
      y: y.clamp(0.0, 3.0),
    }
  }
}

// SBX crossover for two floating point values
fn sbx<R: Rng + ?Sized>(a: f64, b: f64, rng: &mut R) -> f64 {
  let n = 2.0;
  let r: f64 = rng.gen_range(0.0..1.0);
  let beta = if r <= 0.5 {
    (2.0 * r).powf(1.0 / (n + 1.0))
  } else {
    (1.0 / (2.0 * (1.0 - r))).powf(1.0 / (n + 1.0))
  };
  0.5 * ((a + b) - beta * (b - a))
}

impl Genotype for Point {
  type Phenotype = (f64, f64);
  type State = ();

  fn express(&self, _: &()) -> (f64, f64) {
    (self.x, self.y)
  }

  // gaussian noise, which comes from 'rand_distr'
  fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    let dx: f64 = StandardNormal.sample(rng);
    let dy: f64 = StandardNormal.sample(rng);
    *self = Self::clamped(self.x + 0.3 * dx, self.y + 0.3 * dy);
  }

  fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> Self {
    Self::clamped(sbx(self.x, other.x, rng), sbx(self.y, other.y, rng))
  }
}

// objective function f1(x, y) = 4x^2 + 4y^2
fn f1(&(x, y): &(f64, f64)) -> f64 {
  4.0 * x.powi(2) + 4.0 * y.powi(2)
}

// and another objective function f2(x, y) = (x - 5)^2 + (y - 5)^2
fn f2(&(x, y): &(f64, f64)) -> f64 {
  (x - 5.0).powi(2) + (y - 5.0).powi(2)
}

fn main() -> Result<(), Box<dyn Error>> {
  let mut rng = StdRng::seed_from_u64(7);

  // initial population scattered over the search space
  let mut population: Vec<Individual<Point>> = (0..POPULATION)
    .map(|_| {
      Individual::new(Point::clamped(
        rng.gen_range(0.0..5.0),
        rng.gen_range(0.0..3.0),
      ))
    })
    .collect();

  // both objectives are minimized
  let evaluation = |i: &Individual<Point>| {
    [
      Objective::minimize(f1(i.phenotype())),
      Objective::minimize(f2(i.phenotype())),
    ]
  };
  // evaluated concurrently for each batch of individuals
  let evaluation = evaluation.par_batch();
  evaluate_population(&mut population, &evaluation)?;

  for _ in 0..GENERATIONS {
    // binary tournaments won by the better front, then the more crowded
    let parents = TournamentSelector::builder()
      .size(2)
      .duplicates(true)
      .winner(WorstSelector(Nsga2Scores::new(&population)?))
      .build()
      .select(POPULATION, &population, &mut rng)?;

    let mut offspring = Vec::with_capacity(POPULATION);
    for pair in parents.chunks_exact(2) {
      let mut child = pair[0].offspring(pair[1], &mut rng);
      let mut sibling = pair[1].offspring(pair[0], &mut rng);
      child.mutate(&mut rng);
      sibling.mutate(&mut rng);
      offspring.extend([child, sibling]);
    }
    evaluate_population(&mut offspring, &evaluation)?;

    // parents and offspring compete for survival
    population.extend(offspring);
    population = Nsga2Selector::new()
      .select(POPULATION, &population, &mut rng)?
      .into_iter()
      .cloned()
      .collect();
  }

  let front = pareto_front(&population)?;

  // write the Pareto front to file in demos/binh_korn.csv
  std::fs::File::create(Path::new(file!()).with_file_name("binh_korn.csv"))?
    .write_all(
      front
        .iter()
        .map(|i| format!("{} {}", f1(i.phenotype()), f2(i.phenotype())))
        .collect::<Vec<_>>()
        .join("\n")
        .as_bytes(),
    )?;

  // and print 10 solutions of it
  println!("   x   |   y   ");
  for i in front.into_iter().choose_multiple(&mut rng, 10) {
    let (x, y) = i.phenotype();
    println!("{x:.4} | {y:.4}");
  }
  println!("  ...  |  ...  ");
  Ok(())
}
