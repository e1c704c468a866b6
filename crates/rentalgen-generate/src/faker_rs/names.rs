use rand::Rng;

use crate::faker_rs::locales::LocaleKey;

const EN_US_MALE: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven", "Paul",
    "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald", "Jason",
    "Edward", "Jeffrey", "Ryan",
];

const EN_US_FEMALE: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly", "Emily",
    "Donna", "Michelle", "Carol", "Amanda", "Dorothy", "Melissa", "Deborah", "Stephanie",
    "Rebecca", "Sharon", "Laura", "Cynthia",
];

const PT_BR_MALE: &[&str] = &[
    "Joao", "Pedro", "Lucas", "Gabriel", "Rafael", "Mateus", "Gustavo", "Felipe", "Bruno",
    "Thiago", "Rodrigo", "Leonardo", "Diego", "Eduardo", "Marcelo", "Carlos", "Andre", "Paulo",
    "Ricardo", "Fernando",
];

const PT_BR_FEMALE: &[&str] = &[
    "Maria", "Ana", "Juliana", "Fernanda", "Camila", "Beatriz", "Larissa", "Mariana", "Leticia",
    "Amanda", "Bruna", "Gabriela", "Patricia", "Aline", "Vanessa", "Carolina", "Renata",
    "Isabela", "Luana", "Natalia",
];

fn pool(locale: LocaleKey, male: bool) -> &'static [&'static str] {
    match (locale, male) {
        (LocaleKey::EnUs, true) => EN_US_MALE,
        (LocaleKey::EnUs, false) => EN_US_FEMALE,
        (LocaleKey::PtBr, true) => PT_BR_MALE,
        (LocaleKey::PtBr, false) => PT_BR_FEMALE,
    }
}

pub(crate) fn first_name<R: Rng + ?Sized>(
    locale: LocaleKey,
    male: bool,
    rng: &mut R,
) -> &'static str {
    let names = pool(locale, male);
    names[rng.random_range(0..names.len())]
}
