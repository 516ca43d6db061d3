use std::io::Write;

use clap::{Parser, ValueEnum};
use renum::{error, sequence, Criterion, Enumerable, Function, Item, Kind, Sequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Section {
    Each,
    EachWithIndex,
    Select,
    All,
    Any,
    None,
    Count,
    Map,
    Inject,
}

impl Section {
    fn name(&self) -> &'static str {
        match self {
            Section::Each => "each",
            Section::EachWithIndex => "each_with_index",
            Section::Select => "select",
            Section::All => "all",
            Section::Any => "any",
            Section::None => "none",
            Section::Count => "count",
            Section::Map => "map",
            Section::Inject => "inject",
        }
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Demo {
    /// Only run this section. All sections run by default.
    #[arg(long, value_enum)]
    section: Option<Section>,
}

impl Demo {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.section {
            Some(section) => write_section(section, &mut out)?,
            None => {
                for section in Section::value_variants() {
                    write_section(*section, &mut out)?;
                }
            }
        }
        Ok(())
    }
}

fn write_section(section: Section, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "== {} ==", section.name())?;
    match section {
        Section::Each => each(out),
        Section::EachWithIndex => each_with_index(out),
        Section::Select => select(out),
        Section::All => all(out),
        Section::Any => any(out),
        Section::None => none(out),
        Section::Count => count(out),
        Section::Map => map(out),
        Section::Inject => inject(out),
    }
}

const DIGITS: [i64; 100] = [
    1, 2, 3, 5, 1, 7, 3, 4, 5, 7, 2, 3, 2, 0, 8, 8, 7, 8, 1, 6, 1, 1, 7, 2, 1, 2, 5, 8, 6, 0, 4,
    5, 8, 2, 2, 5, 4, 7, 3, 4, 3, 3, 8, 5, 1, 0, 3, 7, 5, 5, 7, 2, 6, 7, 7, 0, 4, 4, 0, 2, 0, 6,
    6, 8, 1, 6, 8, 6, 2, 3, 6, 1, 5, 2, 6, 7, 2, 5, 8, 2, 0, 7, 3, 2, 3, 6, 1, 2, 8, 3, 7, 0, 5,
    0, 0, 2, 6, 1, 5, 2,
];

fn digits() -> Sequence {
    DIGITS.iter().copied().map(Item::from).collect()
}

fn numbers() -> Sequence {
    sequence![11, 2, 3, 56]
}

fn letters() -> Sequence {
    sequence!["a", "b", "c", "d"]
}

fn animals() -> Sequence {
    sequence!["ant", "bear", "cat"]
}

fn d_words() -> Sequence {
    sequence!["dog", "door", "rod", "blade"]
}

fn even(item: &Item) -> error::Result<Item> {
    Ok(Item::from(item.to_integer()? % 2 == 0))
}

fn square(item: &Item) -> error::Result<Item> {
    let i = item.to_integer()?;
    Ok(Item::from(i * i))
}

fn length_at_least(n: usize) -> impl FnMut(&Item) -> error::Result<Item> {
    move |item| Ok(Item::from(item.to_str()?.len() >= n))
}

// a block result, or the enumerator when there was no block
fn written<T: std::fmt::Display>(outcome: renum::Outcome<T>) -> String {
    match outcome {
        renum::Outcome::Evaluated(value) => value.to_string(),
        renum::Outcome::Deferred(enumerator) => enumerator.to_string(),
    }
}

fn each(out: &mut impl Write) -> anyhow::Result<()> {
    for entry in [numbers(), letters()] {
        let mut lines = Vec::new();
        entry.each(Some(&mut |item| {
            lines.push(item.to_string());
            Ok(Item::Nil)
        }))?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }
    }
    if let Some(enumerator) = letters().each(None)?.deferred() {
        writeln!(out, "{}", enumerator)?;
    }
    let mut text = String::new();
    digits().each(Some(&mut |item| {
        text.push_str(&item.string_value()?);
        Ok(Item::Nil)
    }))?;
    writeln!(out, "{}", Item::from(text))?;
    Ok(())
}

fn each_with_index(out: &mut impl Write) -> anyhow::Result<()> {
    let mut lines = Vec::new();
    numbers().each_with_index(Some(&mut |index, item| {
        lines.push(Item::from(format!("item[{}] -> {}", index, item)));
        Ok(Item::Nil)
    }))?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    if let Some(enumerator) = letters().each_with_index(None)?.deferred() {
        writeln!(out, "{}", enumerator)?;
    }
    Ok(())
}

fn select(out: &mut impl Write) -> anyhow::Result<()> {
    let one_to_five = sequence![1, 2, 3, 4, 5];
    let results = [
        numbers().select(Some(&mut even))?,
        letters().select(Some(&mut |item| Ok(Item::from(item == &Item::from("c")))))?,
        one_to_five.select(Some(&mut even))?,
        one_to_five.select(Some(&mut |item| Ok(Item::from(item.to_integer()? % 2 == 1))))?,
        one_to_five.select(Some(&mut |item| Ok(Item::from(item.to_integer()? > 4))))?,
        letters().select(None)?,
    ];
    for result in results {
        writeln!(out, "{}", written(result))?;
    }
    Ok(())
}

fn all(out: &mut impl Write) -> anyhow::Result<()> {
    let t = Criterion::pattern("t")?;
    let results = [
        animals().all_match(Criterion::Absent, Some(&mut length_at_least(3)))?,
        animals().all_match(Criterion::Absent, Some(&mut length_at_least(4)))?,
        animals().all_match(t.clone(), None)?,
        sequence![1, 2].all_match(Kind::Numeric.into(), None)?,
        sequence![1, 2].all_match(Kind::String.into(), None)?,
        sequence![1, 2].all_match(Item::from(1).into(), None)?,
        sequence![1, 1].all_match(Item::from(1).into(), None)?,
        sequence![1, true, "hi", sequence![]].all_match(Criterion::Absent, None)?,
        d_words().all_match(Criterion::pattern("d")?, None)?,
        sequence!["ant", "tiger", "cat"].all_match(t, None)?,
    ];
    for result in results {
        writeln!(out, "{}", result)?;
    }
    Ok(())
}

fn any(out: &mut impl Write) -> anyhow::Result<()> {
    let d = Criterion::pattern("d")?;
    let mixed = sequence![Item::Nil, true, 99];
    let with_string = sequence![1, 2, 3, "s"];
    let results = [
        animals().any_match(Criterion::Absent, Some(&mut length_at_least(3)))?,
        animals().any_match(Criterion::Absent, Some(&mut length_at_least(4)))?,
        animals().any_match(d.clone(), None)?,
        mixed.any_match(Kind::Integer.into(), None)?,
        mixed.any_match(Criterion::Absent, None)?,
        sequence![].any_match(Criterion::Absent, None)?,
        with_string.any_match(Kind::String.into(), None)?,
        with_string.any_match(Kind::Numeric.into(), None)?,
        sequence![1, 2, 3].any_match(Kind::String.into(), None)?,
        sequence![1, 2].any_match(Item::from(1).into(), None)?,
        sequence![1, 1].any_match(Item::from(1).into(), None)?,
        sequence![Item::Nil, false, Item::Nil, false].any_match(Criterion::Absent, None)?,
        d_words().any_match(d, None)?,
    ];
    for result in results {
        writeln!(out, "{}", result)?;
    }
    Ok(())
}

fn none(out: &mut impl Write) -> anyhow::Result<()> {
    let results = [
        animals().none_match(Criterion::Absent, Some(&mut length_at_least(5)))?,
        animals().none_match(Criterion::Absent, Some(&mut length_at_least(4)))?,
        animals().none_match(Criterion::pattern("d")?, None)?,
        sequence![1, 2.5, 42].none_match(Kind::Float.into(), None)?,
        sequence![].none_match(Criterion::Absent, None)?,
        sequence![Item::Nil].none_match(Criterion::Absent, None)?,
        sequence![Item::Nil, false, true].none_match(Criterion::Absent, None)?,
    ];
    for result in results {
        writeln!(out, "{}", result)?;
    }
    Ok(())
}

fn count(out: &mut impl Write) -> anyhow::Result<()> {
    let ary = sequence![1, 2, 4, 2];
    let results = [
        ary.count_matches(None, None)?,
        ary.count_matches(Some(Item::from(9)), None)?,
        ary.count_matches(Some(Item::from(2)), None)?,
        ary.count_matches(None, Some(&mut even))?,
    ];
    for result in results {
        writeln!(out, "{}", result)?;
    }
    Ok(())
}

fn map(out: &mut impl Write) -> anyhow::Result<()> {
    let arr = sequence![1, 2, 7, 4, 5];
    let square_proc = Item::from(Function::new(square));
    let double_proc = Item::from(Function::new(|item| {
        Ok(Item::from(item.to_integer()? * 2))
    }));
    let results = [
        arr.map_sequence(None, Some(&mut square))?,
        (1_i64..=2).map_sequence(None, Some(&mut square))?,
        arr.map_sequence(Some(&square_proc), None)?,
        arr.map_sequence(Some(&double_proc), Some(&mut square))?,
        digits().map_sequence(None, None)?,
    ];
    for result in results {
        writeln!(out, "{}", written(result))?;
    }
    Ok(())
}

fn inject(out: &mut impl Write) -> anyhow::Result<()> {
    let mut sum = |accumulator: Item, item: &Item| -> error::Result<Item> {
        Ok(Item::from(accumulator.to_integer()? + item.to_integer()?))
    };
    let mut longest = |accumulator: Item, item: &Item| -> error::Result<Item> {
        if item.to_str()?.len() > accumulator.to_str()?.len() {
            Ok(item.clone())
        } else {
            Ok(accumulator)
        }
    };
    let results = [
        (5_i64..=10).inject(None, &mut sum)?,
        (5_i64..=10).inject(Some(Item::from(100)), &mut sum)?,
        sequence!["cat", "sheep", "bear"].inject(None, &mut longest)?,
        sequence![].inject(None, &mut sum)?,
    ];
    for result in results {
        writeln!(out, "{}", result)?;
    }
    Ok(())
}
