mod scope_discipline;
