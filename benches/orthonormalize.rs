use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rbspace::{
    DenseSpace, FixedBasis, FullSpaceVector, FunctionSpace, Grammian, HilbertSpace, InnerProductKind,
    ParametrizedSnapshot, ReducedSpace, orthonormalize,
};

fn bench_reduced_basis(c: &mut Criterion) {
    let cells = 400;
    let n = 40;
    let space: Arc<dyn FunctionSpace> = Arc::new(DenseSpace::p1_unit_interval(cells).unwrap());
    let snaps: Vec<ParametrizedSnapshot> = (0..n)
        .map(|m| {
            let mu = m as f64;
            // quasi-random coefficients keep the set well conditioned
            let coeffs = (1..cells)
                .map(|k| ((k * (m + 1) * 7919) as f64 * 0.618_033_988_7).fract() - 0.5)
                .collect();
            let f = FullSpaceVector::from_coefficients(space.clone(), coeffs).unwrap();
            ParametrizedSnapshot::snapshot(f, vec![mu])
        })
        .collect();
    let ip = HilbertSpace::new(InnerProductKind::L2);

    c.bench_function("grammian 40 snapshots", |ben| {
        ben.iter(|| Grammian::build(black_box(&snaps), &ip).unwrap())
    });

    let g = Grammian::build(&snaps[..12], &ip).unwrap();
    c.bench_function("orthonormalize 12 snapshots", |ben| {
        ben.iter(|| orthonormalize(black_box(&snaps[..12]), &ip, Some(&g)).unwrap())
    });

    let strategy = FixedBasis::new(InnerProductKind::L2, snaps[..12].to_vec());
    let rs = ReducedSpace::new(&strategy).unwrap();
    let u = snaps[20].function().clone();
    c.bench_function("project onto 12-dim space", |ben| {
        ben.iter(|| rs.project(black_box(&u)).unwrap())
    });
}

criterion_group!(benches, bench_reduced_basis);
criterion_main!(benches);
