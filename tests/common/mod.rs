//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

pub const GO_HELLO: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Hello, World!")
}
"#;

pub const FORTRAN_HELLO: &str = "program hello\n    print *, 'Hello, World!'\nend program hello\n";

/// One small but non-trivial sample per bundled grammar
pub const SAMPLES: &[(&str, &str)] = &[
    ("go", GO_HELLO),
    (
        "rust",
        "/// Doc\n#[derive(Debug)]\nstruct P { x: i32 }\n\nfn main() {\n    let s = \"a<b>&c\"; // note\n    println!(\"{}\", s.len() + 1);\n}\n",
    ),
    (
        "python",
        "import os\n\n@decorator\ndef f(x: int) -> str:\n    \"\"\"Doc.\"\"\"\n    return f\"{x} < 3\" if x else 'no'\n",
    ),
    (
        "javascript",
        "const a = [1, 2.5, 'x'];\nfunction f(b) { return `t ${b}` > 0 && b !== null; }\n// end\n",
    ),
    ("typescript", "interface A { x: number }\nlet y: A = { x: 1 };\n"),
    ("tsx", "const el = <div className=\"a\">{x}</div>;\n"),
    ("json", "{\n  \"a\": [1, true, null],\n  \"b\": \"</script>\"\n}\n"),
    ("toml", "[package]\nname = \"x\" # comment\nversion = 1.5\n"),
    ("yaml", "key: value\nlist:\n  - 1\n  - \"two\" # c\n"),
    ("bash", "#!/bin/bash\nfor i in 1 2; do echo \"$i\" > /dev/null; done\n"),
    ("c", "#include <stdio.h>\nint main(void) { return 0; /* x */ }\n"),
    ("cpp", "template <typename T> T id(T v) { return v; }\n"),
    ("java", "class A { public static void main(String[] a) { int x = 1 << 2; } }\n"),
    ("css", "a > b { color: #fff; /* c */ margin: 0 1px; }\n"),
    ("html", "<!DOCTYPE html>\n<p class=\"x\">a &amp; b</p>\n<script>if (a < b) {}</script>\n"),
    ("php", "<?php\necho \"hi $name\";\n$a = 1 <=> 2;\n"),
    ("markdown", "# Title\n\nSome *text* with `x < y`.\n\n- item\n- <b>two</b>\n"),
    ("scheme", "(define (sq x) (* x x)) ; square\n(display \"<ok>\")\n"),
    ("ini", "; comment\n[core]\nname = demo & co\n"),
    ("xml", "<?xml version=\"1.0\"?>\n<root a=\"1\"><c>x &amp; y</c><!-- n --></root>\n"),
    ("csharp", "class A { static void Main() { var s = \"<t>\"; int x = 1 << 2; } }\n"),
    ("kotlin", "fun main() {\n    val n = 1 shl 2 // c\n    println(\"n=$n\")\n}\n"),
    ("ruby", "def f(x)\n  \"v: #{x}\" if x > 1 # c\nend\n"),
    ("swift", "let xs = [1, 2]\nfunc f(_ a: Int) -> Bool { a < 3 }\n"),
    ("scala", "object A { def f(x: Int): Int = x << 1 }\n"),
    ("groovy", "def greet(name) { println \"Hi ${name}\" }\n"),
    ("lua", "local t = { 1, 2 } -- c\nprint(#t < 3)\n"),
    ("elixir", "defmodule A do\n  def f(x), do: x <> \"!\"\nend\n"),
    ("elm", "module Main exposing (main)\n\nmain = text \"<hi>\"\n"),
    ("ocaml", "let rec f x = if x < 1 then 0 else f (x - 1) (* c *)\n"),
    ("hcl", "resource \"s3\" \"b\" {\n  bucket = \"x\" # c\n}\n"),
    ("protobuf", "syntax = \"proto3\";\nmessage A { string name = 1; }\n"),
    ("sql", "SELECT id, name FROM users WHERE id > 1; -- c\n"),
    ("svelte", "<script>\n  let n = 0;\n</script>\n\n<button on:click={() => n++}>{n}</button>\n"),
];

/// Broken sources the grammars recover from with ERROR or MISSING nodes
pub const MALFORMED: &[(&str, &str)] = &[
    ("go", "package main\n\nvar s = \"unterminated\n\nfunc main() {}\n"),
    ("rust", "fn main() {\n    if x { let y = [1, 2;\n"),
    ("rust", "fn a() }} fn b() {{\n"),
    ("json", "{\"a\": [1, 2,, }\n"),
    ("python", "def f(:\n    return 'open\n"),
];

/// Drop every `<...>` tag, keeping the text between them
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// The source text carried by highlighted markup
pub fn plain_text(html: &str) -> String {
    html_escape::decode_html_entities(&strip_tags(html)).into_owned()
}

/// Panics unless every `<span ...>` is closed in order
pub fn assert_balanced_spans(html: &str) {
    let mut depth: usize = 0;
    let mut rest = html;
    while let Some(index) = rest.find('<') {
        rest = &rest[index..];
        if rest.starts_with("<span") {
            depth += 1;
        } else if rest.starts_with("</span>") {
            assert!(depth > 0, "closing span without an opener in: {}", html);
            depth -= 1;
        }
        rest = &rest[1..];
    }
    assert_eq!(depth, 0, "unclosed spans in: {}", html);
}

/// Text content must not contain raw angle brackets
pub fn assert_text_escaped(html: &str) {
    let text = strip_tags(html);
    assert!(
        !text.contains('<') && !text.contains('>'),
        "raw angle bracket in text: {}",
        text
    );
}
