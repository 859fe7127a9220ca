use crate::acronyms::AcronymList;
use crate::identifier::Segment;
use crate::orthography::AcronymHandling;

/// Split a camel-cased string into segments.
///
/// Every uppercase character starts a new run. Runs of a single character
/// are collected and become one acronym, so `ABCTest` yields `ABC` and
/// `Test` and the trailing capital in `conceptA` stays an acronym of its own.
/// Longer runs are words, unless `handling` makes their case an unreliable
/// signal (acronyms written as words, or the first segment when initial
/// acronyms are written as words), in which case `acronyms` decides.
///
/// Runs without any letter are dropped, so a string with no letters yields
/// no segments.
pub fn split<A>(input: &str, handling: AcronymHandling, acronyms: &A) -> Vec<Segment>
where
    A: AcronymList + ?Sized,
{
    let runs = runs(input).into_iter().filter(|run| has_letter(run));
    classify(runs, handling, acronyms)
}

/// Like [`split`], but letterless runs are kept, so the segments cover the
/// whole input. Only a leading run can lack letters.
pub(crate) fn split_lossless<A>(input: &str, handling: AcronymHandling, acronyms: &A) -> Vec<Segment>
where
    A: AcronymList + ?Sized,
{
    classify(runs(input), handling, acronyms)
}

pub(crate) fn has_letter(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}

fn classify<A>(runs: impl IntoIterator<Item = String>, handling: AcronymHandling, acronyms: &A) -> Vec<Segment>
where
    A: AcronymList + ?Sized,
{
    let mut carry = String::new();
    let mut segments = Vec::new();

    for run in runs {
        if run.chars().count() == 1 {
            carry.push_str(&run);
            continue;
        }

        if !carry.is_empty() {
            segments.push(Segment::Acronym(std::mem::take(&mut carry)));
        }

        let consult_list = match (handling, segments.is_empty()) {
            (AcronymHandling::AsWords, _) | (AcronymHandling::UpperUnlessInitial, true) => true,
            (AcronymHandling::Upper, _) | (AcronymHandling::UpperUnlessInitial, false) => false,
        };
        let is_acronym = consult_list && acronyms.is_acronym(&run);
        segments.push(Segment::classified(run, is_acronym));
    }

    if !carry.is_empty() {
        segments.push(Segment::Acronym(carry));
    }

    segments
}

fn runs(input: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut buffer = String::new();

    for c in input.chars() {
        if c.is_uppercase() && !buffer.is_empty() {
            runs.push(std::mem::take(&mut buffer));
        }
        buffer.push(c);
    }
    if !buffer.is_empty() {
        runs.push(buffer);
    }
    runs
}
