use rectangles::{LogReporter, Rectangle, intersection};

fn main() {
    env_logger::init();

    let mut reporter = LogReporter;
    let rect1 = Rectangle::new_or_report(1, 4, 2, 3, &mut reporter);
    let rect2 = Rectangle::new_or_report(2, 5, 3, 3, &mut reporter);

    log::debug!("Intersecting {} with {}", rect1, rect2);
    match intersection(&[rect1, rect2]) {
        Some(overlap) => println!("Intersection: {}", overlap),
        None => println!("Intersection: No intersection"),
    }
}
