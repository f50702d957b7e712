use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vrange::{Comparator, Vers, Version};

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0.0", "1"),
        ("10.0.0", "2.0.0"),
        ("1.2.3-rc.1", "1.2.3-rc.2"),
        ("1.2.3-alpha.10", "1.2.3-alpha.9"),
    ];

    c.bench_function("version_compare", |b| {
        b.iter(|| {
            for (x, y) in cases {
                black_box(Comparator::compare(black_box(x), black_box(y)).ok());
            }
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let versions = [
        "v1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.2",
        "42",
        "1.2.3.4",
        "1.0.0rc1",
    ];

    c.bench_function("version_normalize", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Comparator::normalize(black_box(version)).ok());
            }
        })
    });
}

fn bench_parse_native(c: &mut Criterion) {
    let cases = [
        ("^1.2.3", "npm"),
        ("~1.2", "npm"),
        ("1.2.x || 2.x", "npm"),
        (">=1.0.0 <2.0.0", "npm"),
        ("1.0.0 - 2.0.0", "npm"),
        ("~> 1.2.3", "gem"),
        (">= 1.0, != 1.5, < 2.0", "pypi"),
        ("[1.0,2.0)", "maven"),
        ("[1.0,2.0),[3.0,4.0)", "maven"),
        (">>1.0, <<2.0", "deb"),
    ];

    c.bench_function("parse_native", |b| {
        b.iter(|| {
            for (text, scheme) in cases {
                black_box(Vers::parse_native(black_box(text), black_box(scheme)).ok());
            }
        })
    });
}

fn bench_parse_vers(c: &mut Criterion) {
    let uris = [
        "vers:npm/>=1.2.3|<2.0.0",
        "vers:npm/>=1.0.0|!=1.5.0|<2.0.0",
        "vers:pypi/=1.0.0|=2.0.0|=3.0.0",
        "vers:gem/>=1.0.0",
        "*",
    ];

    c.bench_function("parse_vers_uri", |b| {
        b.iter(|| {
            for uri in uris {
                black_box(Vers::parse(black_box(uri)).ok());
            }
        })
    });
}

fn bench_contains(c: &mut Criterion) {
    let range = Vers::parse("vers:npm/>=1.0.0|!=1.5.0|<2.0.0").expect("parse range");
    let probes: Vec<Version> = ["0.9.0", "1.0.0", "1.4.9", "1.5.0", "1.9.9", "2.0.0"]
        .iter()
        .map(|text| Version::parse(text).expect("parse version"))
        .collect();

    c.bench_function("range_contains", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(range.contains(black_box(probe)));
            }
        })
    });
}

fn bench_algebra(c: &mut Criterion) {
    let a = Vers::parse_native("1.2.x || 2.x", "npm").expect("parse a");
    let b_range = Vers::parse_native("[1.0,2.5)", "maven").expect("parse b");

    c.bench_function("range_algebra", |b| {
        b.iter(|| {
            black_box(a.union(black_box(&b_range)));
            black_box(a.intersect(black_box(&b_range)));
            black_box(a.complement());
        })
    });
}

criterion_group!(
    benches,
    bench_compare,
    bench_normalize,
    bench_parse_native,
    bench_parse_vers,
    bench_contains,
    bench_algebra
);
criterion_main!(benches);
