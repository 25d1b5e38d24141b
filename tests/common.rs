/// German sample text, long enough for the letter statistics the solvers
/// rely on (about 1200 letters, umlauts transliterated to plain ASCII)
#[allow(dead_code)]
pub const GERMAN_SAMPLE: &str = "Die Geschichte der klassischen Verschluesselung beginnt \
schon in der Antike. Die Spartaner wickelten einen Lederstreifen um einen Stab und \
schrieben ihre Nachricht der Laenge nach auf das Band. Ohne einen Stab mit dem gleichen \
Umfang blieb der Text ein wirres Durcheinander aus Buchstaben. Julius Caesar schob jeden \
Buchstaben seiner Botschaften um eine feste Zahl von Stellen im Alphabet nach hinten, und \
seine Gegner konnten mit den Briefen nichts anfangen. Erst viel spaeter zeigte der \
preussische Offizier Friedrich Kasiski, wie man auch die Chiffre von Vigenere brechen \
kann. Er suchte nach Wiederholungen im Geheimtext und schloss aus deren Abstaenden auf \
die Laenge des Schluessels. Danach zerfaellt der Text in einzelne Spalten, und jede \
Spalte ist nur noch eine einfache Verschiebung, die sich ueber die Haeufigkeit der \
Buchstaben loesen laesst. Das E ist im Deutschen mit Abstand der haeufigste Buchstabe, \
danach folgen das N und das I. Wer also die Verteilung der Zeichen in einem langen Text \
zaehlt, findet den Schluessel fast von selbst. Wenn man nun eine lange Nachricht \
untersuchen will, dann nimmt man den ganzen Geheimtext und ordnet die Zeichen \
nacheinander in Spalten an. In einer einzelnen Spalte wandern dann nur die Zeichen eines \
einzigen Alphabets, und man kann jede Spalte nehmen und sie wie einen einfachen Text \
behandeln. Denn am Ende gewinnt immer die Statistik, wenn der Text nur lang genug ist.";
