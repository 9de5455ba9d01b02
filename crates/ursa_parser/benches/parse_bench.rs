use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ursa_parser::Parser;
use ursa_scanner::Scanner;

// A medium-size Ursa source with the statement and expression forms the
// parser supports today.
const URSA_SOURCE: &str = "
let width: u32 = 640;
let height: u32 = 480;
let scale: f32 = 2;
let enabled: bool = true;

width * height;
(width + height) * scale;
-width + height / scale;
width < height != enabled;
!(width == height);
~width + -height;

return width * height;
return enabled;

let total: u64 = width * height + 1024;
1 + (2 + 3) + 4;
3 + 4 * 5 == 3 * 1 + 4 * 5;
";

fn bench_parse_program(c: &mut Criterion) {
    c.bench_function("parse_program_medium", |b| {
        b.iter(|| {
            let scanner = Scanner::new(black_box(URSA_SOURCE));
            let mut parser = Parser::new(scanner);
            let program = parser.parse_program();
            black_box(program);
        });
    });
}

fn bench_scan_tokens(c: &mut Criterion) {
    c.bench_function("scan_tokens_medium", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(URSA_SOURCE));
            loop {
                let token = scanner.next_token();
                if token.is_eof() {
                    break;
                }
                black_box(token);
            }
        });
    });
}

criterion_group!(benches, bench_parse_program, bench_scan_tokens);
criterion_main!(benches);
