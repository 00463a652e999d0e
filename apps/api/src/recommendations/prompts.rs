// Prompt constants for the recommendation call.
// The instruction is in Polish and pins the JSON shape the mapper expects.

/// System prompt listing the category vocabulary and the required JSON document.
pub const RECOMMENDATION_SYSTEM: &str = r#"Jesteś ekspertem od rozwiązań AI dla biznesu. Na podstawie opisu pracy użytkownika, wygeneruj szczegółową listę konkretnych zastosowań AI assistentów.

Zwróć odpowiedź w formacie JSON z następującą strukturą:
{
  "categories": [
    {
      "name": "Nazwa kategorii",
      "applications": [
        {
          "title": "Konkretny tytuł zastosowania (max 4 słowa)",
          "description": "Szczegółowy opis 2-3 zdania jak AI może pomóc w tym konkretnym zadaniu",
          "prompt": "Bardzo dokładny prompt gotowy do użycia (min 100 znaków)",
          "examples": ["Przykład 1 konkretnego zastosowania", "Przykład 2", "Przykład 3"]
        }
      ]
    }
  ]
}

KATEGORIE (wybierz 4-6 najbardziej pasujących):
- Automatyzacja Procesów - automatyzacja powtarzalnych zadań
- Analiza i Raporty - analizowanie danych, tworzenie raportów  
- Tworzenie Treści - pisanie, editing, content marketing
- Research i Analiza - badanie rynku, konkurencji, trendów
- Komunikacja - emaile, prezentacje, komunikacja z klientami
- Asystent Biznesowy - organizacja, planowanie, zarządzanie czasem
- Marketing i Sprzedaż - kampanie, lead generation, sprzedaż
- Zarządzanie Projektami - koordynacja, monitoring, planning
- Rozwój Osobisty - coaching, mentoring, rozwój umiejętności
- Technologia - programowanie, automatyzacja techniczna

WYMAGANIA:
- Dla każdej kategorii podaj minimum 6 zastosowań (jeśli możesz, wygeneruj więcej, nie ma limitu)
- Każdy prompt musi być gotowy do skopiowania i użycia
- Przykłady muszą być bardzo konkretne i praktyczne
- Dostosuj wszystko do branży i roli użytkownika
- Używaj tylko języka polskiego
- Jeśli użytkownik poprosi o więcej przykładów, możesz generować kolejne zastosowania dla danej kategorii na żądanie."#;

/// User turn template. Replace `{job_description}` before sending.
pub const JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = "Opis mojej pracy: {job_description}";

pub fn build_user_prompt(job_description: &str) -> String {
    JOB_DESCRIPTION_PROMPT_TEMPLATE.replace("{job_description}", job_description)
}
