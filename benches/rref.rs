use divan::{Bencher, black_box};
use gf2rref::{rref_binary, rref_binary_batch, rref_binary_bytes, BinaryMatrix};

fn main() {
    divan::main();
}

fn setup(rows: usize, cols: usize) -> BinaryMatrix {
    BinaryMatrix::random(rows, cols, 123)
}

mod packed {
    use super::*;

    #[divan::bench]
    fn packed_small(bencher: Bencher) {
        let m = setup(20, 20);
        bencher.bench_local(move || rref_binary(black_box(&m)));
    }

    #[divan::bench]
    fn packed_augmented(bencher: Bencher) {
        let m = setup(64, 129);
        bencher.bench_local(move || rref_binary(black_box(&m)));
    }

    #[divan::bench]
    fn packed_large(bencher: Bencher) {
        let m = setup(512, 512);
        bencher.bench_local(move || rref_binary(black_box(&m)));
    }
}

mod bytes {
    use super::*;

    #[divan::bench]
    fn bytes_small(bencher: Bencher) {
        let m = setup(20, 20).to_rows();
        bencher.bench_local(move || rref_binary_bytes(black_box(&m)));
    }

    #[divan::bench]
    fn bytes_augmented(bencher: Bencher) {
        let m = setup(64, 129).to_rows();
        bencher.bench_local(move || rref_binary_bytes(black_box(&m)));
    }
}

mod batch {
    use super::*;

    #[divan::bench]
    fn batch_small(bencher: Bencher) {
        let matrices: Vec<BinaryMatrix> = (0..256)
            .map(|seed| BinaryMatrix::random(20, 20, seed))
            .collect();
        bencher.bench_local(move || rref_binary_batch(black_box(&matrices)));
    }
}
