//! Static result set served whenever the live call fails.
//!
//! The data does not depend on the job description.

use crate::recommendations::models::{Category, RawApplication};

fn app(title: &str, description: &str, prompt: &str, examples: &[&str]) -> RawApplication {
    RawApplication {
        title: title.to_string(),
        description: description.to_string(),
        prompt: Some(prompt.to_string()),
        examples: Some(examples.iter().map(|e| e.to_string()).collect()),
    }
}

/// Returns the fallback categories. Never empty.
pub fn mock_categories() -> Vec<Category> {
    vec![
        Category::new(
            "Automatyzacja Procesów",
            vec![
                app(
                    "Automatyczne odpowiedzi email",
                    "AI analizuje przychodzące wiadomości i przygotowuje szkice odpowiedzi. Oszczędzasz czas na powtarzalnej korespondencji.",
                    "Przeanalizuj poniższą wiadomość email i przygotuj profesjonalną, uprzejmą odpowiedź w języku polskim. Zachowaj ton firmy, odnieś się do każdego pytania nadawcy i zaproponuj konkretne kolejne kroki.",
                    &["Odpowiedzi na zapytania ofertowe", "Potwierdzenia spotkań", "Obsługa reklamacji"],
                ),
                app(
                    "Porządkowanie dokumentów",
                    "AI klasyfikuje dokumenty i wyciąga z nich kluczowe informacje. Dzięki temu szybciej znajdziesz potrzebne dane.",
                    "Przeczytaj poniższy dokument, określ jego typ (faktura, umowa, notatka, raport), wypisz najważniejsze dane w punktach oraz zaproponuj nazwę pliku i folder, w którym powinien zostać zapisany.",
                    &["Segregowanie faktur", "Archiwizacja umów", "Opisywanie skanów"],
                ),
                app(
                    "Checklisty procesów",
                    "AI zamienia opis procesu w przejrzystą listę kroków. Ułatwia to wdrażanie nowych osób i kontrolę jakości.",
                    "Na podstawie poniższego opisu procesu przygotuj numerowaną checklistę kroków. Dla każdego kroku wskaż osobę odpowiedzialną, potrzebne narzędzia i typowe błędy, których należy unikać.",
                    &["Onboarding pracownika", "Zamknięcie miesiąca", "Publikacja treści"],
                ),
            ],
        ),
        Category::new(
            "Analiza i Raporty",
            vec![
                app(
                    "Podsumowanie danych",
                    "AI streszcza tabele i zestawienia, wskazując najważniejsze trendy. Raport powstaje w kilka minut zamiast godzin.",
                    "Przeanalizuj poniższe dane i przygotuj podsumowanie dla zarządu: trzy najważniejsze wnioski, trendy w porównaniu z poprzednim okresem, ryzyka oraz rekomendowane działania. Użyj prostego języka.",
                    &["Raport sprzedaży", "Analiza kosztów", "Wyniki kwartalne"],
                ),
                app(
                    "Wykrywanie anomalii",
                    "AI wskazuje nietypowe wartości i odchylenia w danych. Pomaga szybko reagować na problemy.",
                    "Przejrzyj poniższe zestawienie i wskaż wartości odbiegające od normy. Dla każdej anomalii podaj możliwą przyczynę, jej potencjalny wpływ na biznes i sugerowany sposób weryfikacji.",
                    &["Nietypowe wydatki", "Spadki sprzedaży", "Błędy w księgowaniu"],
                ),
            ],
        ),
        Category::new(
            "Tworzenie Treści",
            vec![
                app(
                    "Posty w social media",
                    "AI tworzy propozycje postów dopasowane do platformy i grupy docelowej. Utrzymujesz regularność publikacji bez wysiłku.",
                    "Napisz pięć propozycji postów na LinkedIn na temat podany poniżej. Każdy post powinien mieć chwytliwe pierwsze zdanie, maksymalnie 150 słów, wezwanie do działania i trzy dopasowane hashtagi.",
                    &["Ogłoszenie nowej usługi", "Case study klienta", "Porada eksperta"],
                ),
                app(
                    "Redakcja tekstów",
                    "AI poprawia styl, gramatykę i czytelność tekstów. Twoje materiały brzmią profesjonalnie.",
                    "Zredaguj poniższy tekst: popraw błędy językowe, skróć zbyt długie zdania, ujednolić styl i zaproponuj lepszy tytuł. Na końcu wypisz listę wprowadzonych zmian.",
                    &["Artykuł na bloga", "Opis produktu", "Newsletter"],
                ),
            ],
        ),
        Category::new(
            "Komunikacja",
            vec![
                app(
                    "Przygotowanie prezentacji",
                    "AI układa strukturę prezentacji i treść slajdów. Skupiasz się na merytoryce, a nie na formie.",
                    "Przygotuj konspekt prezentacji na 10 slajdów na temat podany poniżej. Dla każdego slajdu podaj tytuł, trzy kluczowe punkty i notatkę dla prelegenta. Dostosuj język do odbiorców biznesowych.",
                    &["Prezentacja dla klienta", "Spotkanie zespołu", "Wystąpienie konferencyjne"],
                ),
                app(
                    "Trudne rozmowy",
                    "AI pomaga przygotować się do wymagających rozmów z klientami lub współpracownikami. Otrzymujesz gotowe argumenty i odpowiedzi.",
                    "Pomóż mi przygotować się do rozmowy opisanej poniżej. Wypisz moje główne cele, prawdopodobne zastrzeżenia rozmówcy, rzeczowe odpowiedzi na nie oraz propozycję otwarcia i zakończenia rozmowy.",
                    &["Negocjacja ceny", "Informacja o opóźnieniu", "Rozmowa oceniająca"],
                ),
            ],
        ),
    ]
}
